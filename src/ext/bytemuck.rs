use crate::ClockTime;

// Safety: ClockTime is #[repr(C)] with three i32 fields, so it has no
// padding and every bit pattern is a valid value.
unsafe impl bytemuck::Zeroable for ClockTime {}
unsafe impl bytemuck::Pod for ClockTime {}
