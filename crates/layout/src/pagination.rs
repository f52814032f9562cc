use crate::document::Page;
use crate::LayoutError;
use log::debug;
use stockreport_types::Size;

pub struct BreakAnalysis {
    pub should_break: bool,
    pub remaining_height: f32,
}

/// Centralized logic to check if an element fits above the footer zone.
///
/// * `cursor_y`: The current Y position on the page.
/// * `height`: The required height for the element.
/// * `body_bottom`: The lowest Y the page body may reach.
pub fn check_fit(cursor_y: f32, height: f32, body_bottom: f32) -> BreakAnalysis {
    let available = (body_bottom - cursor_y).max(0.0);
    // Use a small epsilon to handle floating point inaccuracies
    const EPSILON: f32 = 0.01;
    BreakAnalysis {
        should_break: height > available + EPSILON,
        remaining_height: available,
    }
}

/// Hook invoked exactly once for every physical page, after its body is final.
pub trait PageLifecycle {
    fn on_page_complete(&mut self, page: &mut Page) -> Result<(), LayoutError>;
}

/// The page sequence being laid out. Only the current page accepts drawing.
pub struct ReportCanvas<'l> {
    size: Size,
    completed: Vec<Page>,
    current: Page,
    lifecycle: &'l mut dyn PageLifecycle,
}

impl<'l> ReportCanvas<'l> {
    pub fn new(size: Size, lifecycle: &'l mut dyn PageLifecycle) -> Self {
        ReportCanvas {
            size,
            completed: Vec::new(),
            current: Page::new(1, size),
            lifecycle,
        }
    }

    pub fn surface(&mut self) -> &mut Page {
        &mut self.current
    }

    pub fn page_number(&self) -> u32 {
        self.current.number
    }

    /// Completes the current page and opens the next one.
    pub fn break_page(&mut self) -> Result<(), LayoutError> {
        let next = Page::new(self.current.number + 1, self.size);
        let mut finished = std::mem::replace(&mut self.current, next);
        self.lifecycle.on_page_complete(&mut finished)?;
        debug!(
            "Page {} complete with {} ops, continuing on page {}",
            finished.number,
            finished.ops.len(),
            self.current.number
        );
        self.completed.push(finished);
        Ok(())
    }

    /// Completes the last page and returns every page in order.
    pub fn finish(self) -> Result<Vec<Page>, LayoutError> {
        let ReportCanvas {
            mut completed,
            mut current,
            lifecycle,
            ..
        } = self;
        lifecycle.on_page_complete(&mut current)?;
        completed.push(current);
        Ok(completed)
    }
}
