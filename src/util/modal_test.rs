use std::cell::RefCell;

use super::*;

#[test]
fn active_modal_starts_open() {
    assert_eq!(ActiveModal::new(|_| {}).last_reason(), None);
}

#[test]
fn dismiss_forwards_reason_and_records_it() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let modal = ActiveModal::new(move |reason| sink.borrow_mut().push(reason));
    modal.dismiss(DismissReason::Cancel);
    assert_eq!(*seen.borrow(), vec![DismissReason::Cancel]);
    assert_eq!(modal.last_reason(), Some(DismissReason::Cancel));
}

#[test]
fn clones_share_last_reason() {
    let modal = ActiveModal::new(|_| {});
    let clone = modal.clone();
    clone.dismiss(DismissReason::LoginSuccess);
    assert_eq!(modal.last_reason(), Some(DismissReason::LoginSuccess));
}
