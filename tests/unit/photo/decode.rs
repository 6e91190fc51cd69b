use std::{io::Cursor, path::PathBuf, sync::Arc};

use super::*;

fn png_bytes(img: DynamicImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decodes_in_memory_png() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, image::Rgb([9, 8, 7])));
    let src = PhotoSource::Bytes(Arc::new(png_bytes(img)));
    let decoded = decode_photo(&src).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (3, 2));
}

#[test]
fn missing_file_is_photo_unreadable() {
    let src = PhotoSource::Path(PathBuf::from("/no/such/photo.jpg"));
    let err = decode_photo(&src).unwrap_err();
    assert!(matches!(err, CardError::PhotoUnreadable(_)));
    assert!(err.to_string().contains("/no/such/photo.jpg"));
}

#[test]
fn garbage_bytes_are_photo_unreadable() {
    let src = PhotoSource::Bytes(Arc::new(b"not an image".to_vec()));
    assert!(matches!(
        decode_photo(&src),
        Err(CardError::PhotoUnreadable(_))
    ));
}

#[test]
fn absent_photo_is_photo_unreadable() {
    assert!(matches!(
        decode_photo(&PhotoSource::None),
        Err(CardError::PhotoUnreadable(_))
    ));
}

#[test]
fn transparency_is_flattened_onto_backdrop() {
    let mut rgba = image::RgbaImage::new(2, 1);
    rgba.put_pixel(0, 0, image::Rgba([200, 100, 0, 255]));
    rgba.put_pixel(1, 0, image::Rgba([200, 100, 0, 0]));
    let flat = flatten_onto(&DynamicImage::ImageRgba8(rgba), Rgba8::rgb(10, 20, 30));
    assert_eq!(flat.get_pixel(0, 0).0, [200, 100, 0]);
    assert_eq!(flat.get_pixel(1, 0).0, [10, 20, 30]);
}
