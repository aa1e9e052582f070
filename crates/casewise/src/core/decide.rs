use crate::data::Scalar;

/// Decide whether a resolved case matches the resolved switch.
///
/// A case that resolved to the literal `true` matches outright. Anything
/// else, `false` included, is compared with the switch by strict equality.
pub fn decide(switch: &Scalar, case: &Scalar) -> bool {
    if case.is_true() {
        return true;
    }
    switch == case
}
