/// Route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `home`: Landing page and its form target
/// - `waitlist`: JSON signup endpoint
/// - `waitlist_count`: JSON signup count endpoint
/// - `health`: Health check endpoint

pub mod health;
pub mod home;
pub mod waitlist;
pub mod waitlist_count;
