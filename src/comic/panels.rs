//! Panel list construction and text-overlay matching

use super::model::Panel;
use crate::error::FatalError;
use crate::natsort::{first_number, same_number};

/// One panel per image, in the order given, with no overlays yet
pub fn panels_from_images(images: Vec<String>) -> Vec<Panel> {
    images.into_iter().map(Panel::new).collect()
}

/// Attach each text file to the first panel whose image carries the same number.
///
/// Numbers are the first digit run in each filename. A text file that
/// matches no panel is dropped; a later text file with the same number
/// overwrites the earlier one.
pub fn attach_text(panels: &mut [Panel], text_files: &[String]) -> Result<(), FatalError> {
    for text in text_files {
        let text_num =
            first_number(text).ok_or_else(|| FatalError::TextWithoutNumber(text.clone()))?;

        for panel in panels.iter_mut() {
            let image_num = first_number(&panel.image)
                .ok_or_else(|| FatalError::ImageWithoutNumber(panel.image.clone()))?;

            if same_number(image_num, text_num) {
                panel.text = text.clone();
                break;
            }
        }
    }

    Ok(())
}
