use crate::error::InferenceError;
use image::imageops::FilterType;
use ndarray::Array4;

/// Input side length the classifier was exported with.
const SIDE: u32 = 224;

// ImageNet Standards
const MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Turns an uploaded image into the `[1, 3, 224, 224]` NCHW tensor the
/// classifier expects.
///
/// Chest X-rays usually arrive as 8-bit grayscale; decoding to RGB
/// replicates the single channel, which matches how the model was trained.
pub fn tensor_from_bytes(buffer: &[u8]) -> Result<Array4<f32>, InferenceError> {
    // 1. Decode (format is guessed from the bytes)
    let img = image::load_from_memory(buffer).map_err(InferenceError::ImageError)?;

    // 2. Resize to the model's fixed input size
    let resized = img.resize_exact(SIDE, SIDE, FilterType::Triangle).to_rgb8();

    // 3. Normalize into a channel-first tensor
    let side = SIDE as usize;
    let mut tensor = Array4::<f32>::zeros((1, 3, side, side));
    for (x, y, pixel) in resized.enumerate_pixels() {
        for c in 0..3 {
            tensor[[0, c, y as usize, x as usize]] =
                ((pixel[c] as f32 / 255.0) - MEAN[c]) / STD[c];
        }
    }

    Ok(tensor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, RgbImage};
    use std::io::Cursor;

    fn png_bytes(img: &RgbImage) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        img.write_to(&mut cursor, image::ImageFormat::Png).unwrap();
        buffer
    }

    #[test]
    fn test_tensor_shape() {
        let buffer = png_bytes(&RgbImage::new(10, 10));
        let tensor = tensor_from_bytes(&buffer).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);
    }

    #[test]
    fn test_inputs_of_any_size_are_resized() {
        for (w, h) in [(32, 32), (640, 480), (224, 224)] {
            let buffer = png_bytes(&RgbImage::new(w, h));
            let tensor = tensor_from_bytes(&buffer).unwrap();
            assert_eq!(tensor.shape(), &[1, 3, 224, 224]);
        }
    }

    #[test]
    fn test_normalization_of_uniform_image() {
        // Every pixel 128: after normalization each channel holds
        // (128/255 - mean) / std throughout.
        let img = RgbImage::from_pixel(10, 10, image::Rgb([128, 128, 128]));
        let tensor = tensor_from_bytes(&png_bytes(&img)).unwrap();

        for c in 0..3 {
            let expected = ((128.0 / 255.0) - MEAN[c]) / STD[c];
            let actual = tensor[[0, c, 0, 0]];
            assert!((actual - expected).abs() < 0.001);
        }
    }

    #[test]
    fn test_grayscale_xray_is_accepted() {
        // Typical X-ray export: single-channel PNG. Decoding replicates the
        // channel, so all three channels carry the same intensity.
        let gray = GrayImage::from_pixel(64, 64, image::Luma([200]));
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        gray.write_to(&mut cursor, image::ImageFormat::Png).unwrap();

        let tensor = tensor_from_bytes(&buffer).unwrap();
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);

        let r = (tensor[[0, 0, 0, 0]] * STD[0]) + MEAN[0];
        let g = (tensor[[0, 1, 0, 0]] * STD[1]) + MEAN[1];
        let b = (tensor[[0, 2, 0, 0]] * STD[2]) + MEAN[2];
        assert!((r - g).abs() < 0.001);
        assert!((g - b).abs() < 0.001);
    }

    #[test]
    fn test_invalid_bytes_are_rejected() {
        let result = tensor_from_bytes(b"not an image");
        match result.unwrap_err() {
            InferenceError::ImageError(_) => {} // Expected
            other => panic!("Expected ImageError, got {:?}", other),
        }
    }

    #[test]
    fn test_mean_std_constants() {
        // Verify ImageNet normalization constants
        assert_eq!(MEAN, [0.485, 0.456, 0.406]);
        assert_eq!(STD, [0.229, 0.224, 0.225]);
    }
}
