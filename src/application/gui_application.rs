use crate::{Button, CheckBox, GuiFactory, Platform};

/// One button and one checkbox from the same factory.
pub struct Widgets {
    pub button: Box<dyn Button>,
    pub check_box: Box<dyn CheckBox>,
}

impl Widgets {
    /// Paints the button, then the checkbox.
    pub fn paint(&self) {
        self.button.paint();
        self.check_box.paint();
    }
}

/// Client code that only sees widgets through [`GuiFactory`], [`Button`] and
/// [`CheckBox`].
pub struct Application<'a> {
    factory: &'a dyn GuiFactory,
}

impl<'a> Application<'a> {
    /// Wraps a factory; nothing is created until [`Application::run`].
    pub fn new(factory: &'a dyn GuiFactory) -> Self {
        Self { factory }
    }

    /// The platform of the wrapped factory.
    pub fn platform(&self) -> Platform {
        self.factory.platform()
    }

    /// Creates a button and a checkbox without painting them.
    pub fn run(&self) -> Widgets {
        log::debug!("building {} widgets", self.factory.platform());
        Widgets {
            button: self.factory.create_button(),
            check_box: self.factory.create_check_box(),
        }
    }

    /// Creates both widgets and paints them, button first.
    pub fn run_and_paint(&self) -> Widgets {
        let widgets = self.run();
        widgets.paint();
        widgets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use crate::{MacFactory, WinFactory};
    use std::cell::Cell;
    use std::sync::Arc;

    struct CountingFactory {
        inner: WinFactory,
        buttons: Cell<usize>,
        check_boxes: Cell<usize>,
    }

    impl GuiFactory for CountingFactory {
        fn platform(&self) -> Platform {
            self.inner.platform()
        }

        fn create_button(&self) -> Box<dyn Button> {
            self.buttons.set(self.buttons.get() + 1);
            self.inner.create_button()
        }

        fn create_check_box(&self) -> Box<dyn CheckBox> {
            self.check_boxes.set(self.check_boxes.get() + 1);
            self.inner.create_check_box()
        }
    }

    #[test]
    fn test_run_creates_each_widget_once() {
        let sink = MemorySink::new();
        let factory = CountingFactory {
            inner: WinFactory::new(Arc::new(sink.clone())),
            buttons: Cell::new(0),
            check_boxes: Cell::new(0),
        };

        let widgets = Application::new(&factory).run();

        assert_eq!(factory.buttons.get(), 1);
        assert_eq!(factory.check_boxes.get(), 1);
        assert_eq!(widgets.button.platform(), Platform::Windows);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_run_and_paint_emits_two_lines() {
        let sink = MemorySink::new();
        let factory = MacFactory::new(Arc::new(sink.clone()));

        let app = Application::new(&factory);
        assert_eq!(app.platform(), Platform::Mac);
        app.run_and_paint();

        assert_eq!(sink.lines(), vec!["Paint Mac Button", "Paint mac Button"]);
    }
}
