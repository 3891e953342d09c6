#[path = "common/mod.rs"]
mod common;

use common::*;
use month_picker::{DateRangeSelector, NavAction, SelectorOptions};
use std::cell::RefCell;
use std::rc::Rc;
use time::macros::datetime;
use time::PrimitiveDateTime;

/// Construction commits the initial selection, so the callback fires once
/// with the first of the clamped month.
#[test]
fn construction_fires_once() {
    let (_p, fired) = recording_picker("2020-01-01", "2020-06-15", "2020-08-01");
    assert_eq!(*fired.borrow(), vec![datetime!(2020-06-01 0:00)]);
}

/// Exactly one firing per `set_date`, even when the selection does not change.
#[test]
fn one_firing_per_set_date_without_dedup() {
    let (mut p, fired) = recording_picker("2020-01-01", "2020-12-31", "2020-03-03");
    fired.borrow_mut().clear();

    p.set_date("2020-03-20").unwrap();
    p.set_date("2020-03-20").unwrap();
    p.set_date("2020-03-01").unwrap();
    p.set_date("2035-01-01").unwrap(); // clamped, still fires
    assert_eq!(
        *fired.borrow(),
        vec![
            datetime!(2020-03-01 0:00),
            datetime!(2020-03-01 0:00),
            datetime!(2020-03-01 0:00),
            datetime!(2020-12-01 0:00),
        ]
    );
}

/// Host events and navigation each commit exactly once.
#[test]
fn host_events_fire_once_each() {
    let (mut p, fired) = recording_picker("2020-01-01", "2021-12-31", "2020-06-15");
    fired.borrow_mut().clear();

    p.select_month(2).unwrap();
    p.select_year(2021).unwrap();
    for action in NavAction::ALL {
        p.navigate(action);
    }
    assert_eq!(fired.borrow().len(), 6);
    assert_eq!(fired.borrow().last().copied(), Some(datetime!(2021-12-01 0:00)));
}

/// Failed calls never reach the callback.
#[test]
fn errors_do_not_fire() {
    let (mut p, fired) = recording_picker("2020-01-01", "2020-12-31", "2020-03-03");
    fired.borrow_mut().clear();

    assert!(p.set_date("").is_err());
    assert!(p.select_month(42).is_err());
    assert!(fired.borrow().is_empty());
}

/// Without a callback, commits simply update state.
#[test]
fn no_callback_configured() {
    let mut p = picker("2020-01-01", "2020-12-31", "2020-03-03");
    assert!(p.set_date("2020-09-09").is_ok());
    assert_eq!(p.selected_date(), datetime!(2020-09-01 0:00));
}

#[derive(Default)]
struct Form {
    period: Option<PrimitiveDateTime>,
    edits: usize,
}

/// A scoped callback receives `&mut` access to its receiver on every commit.
#[test]
fn scoped_callback_updates_receiver() {
    let form = Rc::new(RefCell::new(Form::default()));
    let mut p = DateRangeSelector::new(
        SelectorOptions::new()
            .with_date_range("2020-01-01", "2020-12-31")
            .with_selected_date("2020-05-05")
            .on_change_scoped(form.clone(), |form: &mut Form, date| {
                form.period = Some(date);
                form.edits += 1;
            }),
    )
    .unwrap();

    p.next();
    let f = form.borrow();
    assert_eq!(f.period, Some(datetime!(2020-06-01 0:00)));
    assert_eq!(f.edits, 2);
}

/// The callback can be swapped or removed after construction.
#[test]
fn replace_and_clear_callback() {
    let (mut p, fired) = recording_picker("2020-01-01", "2020-12-31", "2020-03-03");
    let count = Rc::new(RefCell::new(0usize));
    let c = count.clone();
    p.set_on_change(Some(Box::new(move |_: PrimitiveDateTime| *c.borrow_mut() += 1)));

    p.set_date("2020-04-04").unwrap();
    assert_eq!(*count.borrow(), 1);
    assert_eq!(fired.borrow().len(), 1, "old callback only saw construction");

    p.set_on_change(None);
    p.set_date("2020-05-05").unwrap();
    assert_eq!(*count.borrow(), 1);
}

/// A receiver the host is still borrowing does not crash the commit;
/// the selection is applied and later commits reach the receiver again.
#[test]
fn scoped_callback_tolerates_borrowed_receiver() {
    let form = Rc::new(RefCell::new(Form::default()));
    let mut p = DateRangeSelector::new(
        SelectorOptions::new()
            .with_date_range("2020-01-01", "2020-12-31")
            .with_selected_date("2020-05-05")
            .on_change_scoped(form.clone(), |form: &mut Form, date| {
                form.period = Some(date);
                form.edits += 1;
            }),
    )
    .unwrap();

    {
        let held = form.borrow();
        p.set_date("2020-08-08").unwrap();
        assert_eq!(held.edits, 1, "commit while borrowed is not delivered");
    }
    assert_eq!(p.selected_date(), datetime!(2020-08-01 0:00));

    p.next();
    let f = form.borrow();
    assert_eq!(f.edits, 2);
    assert_eq!(f.period, Some(datetime!(2020-09-01 0:00)));
}

/// At the last month the calendar supports, every commit still fires with
/// the first of the month.
#[test]
fn fires_at_calendar_edge() {
    let (mut p, fired) = recording_picker("9999-12-05 10:00", "9999-12-31 23:59:59", "9999-12-20");
    p.set_date("9999-12-31").unwrap();
    p.navigate(NavAction::Next);
    p.navigate(NavAction::Last);
    assert_eq!(*fired.borrow(), vec![datetime!(9999-12-01 0:00); 4]);
    assert!(!p.is_enabled(NavAction::Next));
}
