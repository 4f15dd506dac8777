mod accessor;
mod capture;
mod lookup;
mod numeric;

pub use capture::InvalidConversion;
