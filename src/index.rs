use num::PrimInt;
use num::Unsigned;

/// Trait representing an unsigned integer type used to address positions in the
/// logical vector, which allows the sparse vector to be generic over index widths.
// PrimInt brings Copy + Ord, which is all that storage and sorting need.
pub trait IndexType: PrimInt + Unsigned {}

impl IndexType for u8 {}

impl IndexType for u16 {}

impl IndexType for u32 {}

impl IndexType for u64 {}

impl IndexType for u128 {}

impl IndexType for usize {}
