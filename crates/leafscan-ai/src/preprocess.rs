//! Decode an uploaded image and frame it as a single-image NHWC batch.
//!
//! The classifier was trained on 128×128 RGB inputs with raw `0..=255` pixel
//! values, so images are resized exactly (no crop, aspect ratio discarded)
//! with nearest-neighbour sampling and left unnormalised.

use image::DynamicImage;
use image::imageops::{self, FilterType};

use crate::error::InferenceError;

/// Side length of the square model input.
pub const INPUT_SIZE: u32 = 128;
pub const CHANNELS: usize = 3;

const INPUT_LEN: usize = (INPUT_SIZE as usize) * (INPUT_SIZE as usize) * CHANNELS;

/// A batch of one image, shape `[1, 128, 128, 3]`, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct InputTensor {
    data: Vec<f32>,
}

impl InputTensor {
    pub fn shape(&self) -> [usize; 4] {
        [1, INPUT_SIZE as usize, INPUT_SIZE as usize, CHANNELS]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Pixel `(x, y)` of the single batch entry.
    pub fn pixel(&self, x: usize, y: usize) -> [f32; CHANNELS] {
        let offset = (y * INPUT_SIZE as usize + x) * CHANNELS;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ]
    }
}

/// Decode raw upload bytes. The format is sniffed from the content.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, InferenceError> {
    if bytes.is_empty() {
        return Err(InferenceError::Decode("empty upload".into()));
    }
    Ok(image::load_from_memory(bytes)?)
}

/// Resize to 128×128 RGB and frame as a batch of one.
pub fn to_input_tensor(image: &DynamicImage) -> InputTensor {
    let rgb = image.to_rgb8();
    let resized = imageops::resize(&rgb, INPUT_SIZE, INPUT_SIZE, FilterType::Nearest);

    let data: Vec<f32> = resized.into_raw().into_iter().map(f32::from).collect();
    debug_assert_eq!(data.len(), INPUT_LEN);

    InputTensor { data }
}
