// SPDX-License-Identifier: MPL-2.0
//! Native blocking dialogs: alerts, confirmations and the image picker.

use crate::ui::staging::IMAGE_EXTENSIONS;
use rfd::{
    AsyncFileDialog, AsyncMessageDialog, MessageButtons, MessageDialogResult, MessageLevel,
};
use std::path::PathBuf;

/// Shows an error message and waits until it is dismissed.
pub async fn alert(title: String, description: String) {
    AsyncMessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::Ok)
        .show()
        .await;
}

/// Asks an OK/Cancel question; returns `true` on OK.
pub async fn confirm(title: String, description: String) -> bool {
    let answer = AsyncMessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::OkCancel)
        .show()
        .await;

    matches!(answer, MessageDialogResult::Ok | MessageDialogResult::Yes)
}

/// Lets the user pick several image files.
pub async fn pick_images(title: String, filter_name: String) -> Option<Vec<PathBuf>> {
    AsyncFileDialog::new()
        .set_title(title)
        .add_filter(filter_name, IMAGE_EXTENSIONS)
        .pick_files()
        .await
        .map(|files| files.iter().map(|f| f.path().to_path_buf()).collect())
}
