#![allow(dead_code)]

use month_picker::{DateRangeSelector, SelectorOptions};
use std::cell::RefCell;
use std::rc::Rc;
use time::PrimitiveDateTime;

/// Shared log of every date the change callback received.
pub type Fired = Rc<RefCell<Vec<PrimitiveDateTime>>>;

/// Build a selector over string bounds; panics on configuration errors.
pub fn picker(min: &str, max: &str, selected: &str) -> DateRangeSelector {
    DateRangeSelector::new(
        SelectorOptions::new()
            .with_date_range(min, max)
            .with_selected_date(selected),
    )
    .unwrap()
}

/// Same as `picker`, but every callback firing is recorded in the returned log.
pub fn recording_picker(min: &str, max: &str, selected: &str) -> (DateRangeSelector, Fired) {
    let fired: Fired = Rc::new(RefCell::new(Vec::new()));
    let sink = fired.clone();
    let p = DateRangeSelector::new(
        SelectorOptions::new()
            .with_date_range(min, max)
            .with_selected_date(selected)
            .on_change(move |d| sink.borrow_mut().push(d)),
    )
    .unwrap();
    (p, fired)
}

/// Indexes (0..=11) of the month options currently disabled.
pub fn disabled(p: &DateRangeSelector) -> Vec<u8> {
    p.controls().disabled_months()
}
