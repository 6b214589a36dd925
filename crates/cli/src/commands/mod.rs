//! CLI command implementations.

pub mod cart;
pub mod catalog;

use shoestring_cart::notify::{Notification, Notifier};

/// Notifier that prints rejections straight to the terminal.
///
/// The CLI is the UI layer here, so this is where the toast messages land.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    #[allow(clippy::print_stdout)]
    fn notify(&self, notification: Notification) {
        println!("! {notification}");
    }
}
