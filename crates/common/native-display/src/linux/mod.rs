pub(crate) mod impl_displays;
mod utils;
