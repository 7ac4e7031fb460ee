//! Client-side state modules.
//!
//! DESIGN
//! ======
//! View-models here hold form state and orchestrate collaborators; rendering
//! lives in `components` so the logic runs without a browser.

pub mod login;
