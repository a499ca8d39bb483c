//! Applying a coupon: copy its code and remember it for output on exit

use super::app_state::App;
use crate::clipboard::copy_to_clipboard;

impl App {
    /// Apply the coupon at `index` in catalog order. Returns false when there
    /// is no such coupon.
    pub fn apply_coupon(&mut self, index: usize) -> bool {
        let Some(coupon) = self.catalog.get(index) else {
            return false;
        };
        let code = coupon.code.clone();

        match copy_to_clipboard(&code, self.clipboard_backend) {
            Ok(()) => self.notification.show(&format!("Copied {}!", code)),
            Err(_e) => {
                #[cfg(debug_assertions)]
                log::warn!("Clipboard copy of {} failed: {}", code, _e);

                self.notification
                    .show_warning(&format!("Applied {} (clipboard unavailable)", code));
            }
        }

        #[cfg(debug_assertions)]
        log::debug!("Applied coupon {} ({})", code, coupon.id);

        self.applied = Some(code);
        self.mark_dirty();
        true
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod apply_tests;
