pub(crate) mod impl_displays;
