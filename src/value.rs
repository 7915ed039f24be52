use num::Num;

/// Trait representing the numeric type stored at each populated position.
/// Implemented for every `num::Num` type, so both primitive numbers and
/// numeric newtypes can be stored.
pub trait Value: Num {}

impl<T: Num> Value for T {}
