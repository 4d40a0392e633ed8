//! Feed interleaving and hero rotation for a blog front page, plus the
//! terminal front end that renders them.
//!
//! The two pieces of logic worth reusing on their own are
//! [`feed::interleave`] and [`rotation::Rotation`]; everything else is the
//! `blogdeck` binary's UI.

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod input;
pub mod rotation;
pub mod timers;
pub mod ui;
