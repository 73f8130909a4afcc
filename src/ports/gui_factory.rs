use crate::Platform;
use crate::ports::{Button, CheckBox};

/// Creates one family of widgets.
///
/// Every product returned by a single factory belongs to the factory's
/// [`Platform`].
pub trait GuiFactory {
    fn platform(&self) -> Platform;

    fn create_button(&self) -> Box<dyn Button>;

    fn create_check_box(&self) -> Box<dyn CheckBox>;
}
