use crate::{Platform, WidgetId};

pub trait Button {
    /// Writes this button's paint line to its output sink.
    fn paint(&self);

    fn id(&self) -> WidgetId;

    fn platform(&self) -> Platform;
}

pub trait CheckBox {
    /// Writes this checkbox's paint line to its output sink.
    fn paint(&self);

    fn id(&self) -> WidgetId;

    fn platform(&self) -> Platform;
}
