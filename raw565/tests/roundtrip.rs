use byteorder::{BigEndian, ByteOrder, LittleEndian};
use raw565::{
    decode::{decode, decode_header, DecodeError},
    encode::{encode, encode_to_vec, EncodeError},
    pixel::{pack_rgb565, unpack_rgb565},
    Header, Rgb888Image,
};

fn image_from_pixels(width: usize, height: usize, pixels: &[[u8; 3]]) -> Rgb888Image {
    Rgb888Image::from_raw(width, height, pixels.to_vec()).unwrap()
}

#[test]
fn pack_truncates_channels() {
    assert_eq!(pack_rgb565([0, 0, 0]), 0x0000);
    assert_eq!(pack_rgb565([255, 255, 255]), 0xFFFF);
    // low 3/2/3 bits of each channel are dropped, not rounded
    assert_eq!(pack_rgb565([7, 3, 7]), 0x0000);
    assert_eq!(pack_rgb565([0x12, 0x34, 0x56]), 0x11AA);
}

#[test]
fn unpack_widens_by_shift() {
    assert_eq!(unpack_rgb565(0xFFFF), [0xF8, 0xFC, 0xF8]);
    assert_eq!(unpack_rgb565(0x0000), [0, 0, 0]);
    // 888 -> 565 -> 888 clears the low channel bits
    assert_eq!(unpack_rgb565(pack_rgb565([15, 7, 15])), [8, 4, 8]);
}

#[test]
fn pack_of_unpack_is_identity_for_all_words() {
    for p in 0..=u16::MAX {
        assert_eq!(pack_rgb565(unpack_rgb565(p)), p);
    }
}

#[test]
fn blob_layout_little_endian() {
    let image = image_from_pixels(1, 1, &[[255, 255, 255]]);

    let mut blob = Vec::new();
    encode_to_vec::<LittleEndian>(&image, &mut blob).unwrap();

    assert_eq!(blob, [0x01, 0x00, 0x01, 0x00, 0xFF, 0xFF]);
}

#[test]
fn blob_layout_big_endian() {
    let image = image_from_pixels(1, 1, &[[255, 255, 255]]);

    let mut blob = Vec::new();
    encode_to_vec::<BigEndian>(&image, &mut blob).unwrap();

    assert_eq!(blob, [0x00, 0x01, 0x00, 0x01, 0xFF, 0xFF]);
}

#[test]
fn blob_size_law() {
    let image = image_from_pixels(3, 2, &[[0; 3]; 6]);

    let mut blob = Vec::new();
    encode_to_vec::<LittleEndian>(&image, &mut blob).unwrap();
    assert_eq!(blob.len(), 4 + 2 * 3 * 2);

    let decoded = decode::<LittleEndian>(&blob).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (3, 2));
}

#[test]
fn zero_area_images() {
    for (width, height) in [(0, 0), (0, 5), (7, 0)] {
        let image = Rgb888Image::new(width, height);

        let mut blob = Vec::new();
        encode_to_vec::<LittleEndian>(&image, &mut blob).unwrap();
        assert_eq!(blob.len(), 4, "{width}x{height} must encode to header only");

        let decoded = decode::<LittleEndian>(&blob).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (width, height));
        assert_eq!(decoded.pixels().count(), 0);
    }
}

#[test]
fn oversized_dimensions_fail_before_any_output() {
    let image = Rgb888Image::new(65536, 0);

    let mut blob = Vec::new();
    let err = encode_to_vec::<LittleEndian>(&image, &mut blob).unwrap_err();
    assert!(matches!(err, EncodeError::DimensionOutOfRange { .. }));
    assert!(blob.is_empty(), "no bytes may be written on failure");
}

#[test]
fn truncated_header_fails() {
    let err = decode::<LittleEndian>(&[0x01, 0x00, 0x01]).unwrap_err();
    assert!(matches!(err, DecodeError::TruncatedInput { .. }));

    let err = decode_header::<LittleEndian>(&[]).unwrap_err();
    assert!(matches!(err, DecodeError::TruncatedInput { .. }));
}

#[test]
fn truncated_pixel_stream_fails() {
    // 2x2 blob needs 12 bytes, cut down to 10
    let image = image_from_pixels(2, 2, &[[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]]);

    let mut blob = Vec::new();
    encode_to_vec::<LittleEndian>(&image, &mut blob).unwrap();
    assert_eq!(blob.len(), 12);

    let err = decode::<LittleEndian>(&blob[..10]).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::TruncatedInput {
            expected: 12,
            actual: 10
        }
    ));
}

#[test]
fn trailing_bytes_are_ignored() {
    let image = image_from_pixels(1, 1, &[[255, 0, 0]]);

    let mut blob = Vec::new();
    encode_to_vec::<LittleEndian>(&image, &mut blob).unwrap();
    blob.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

    let decoded = decode::<LittleEndian>(&blob).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (1, 1));
}

#[test]
fn decode_is_row_major_top_left() {
    let words: [u16; 6] = [0xFFFF, 0x0000, 0xF800, 0x07E0, 0x001F, 0x1234];

    let mut blob = vec![0x03, 0x00, 0x02, 0x00];
    for word in words {
        let mut bytes = [0; 2];
        LittleEndian::write_u16(&mut bytes, word);
        blob.extend_from_slice(&bytes);
    }

    let decoded = decode::<LittleEndian>(&blob).unwrap();
    assert_eq!(decoded.get(0, 0), unpack_rgb565(words[0]));
    assert_eq!(decoded.get(2, 0), unpack_rgb565(words[2]));
    assert_eq!(decoded.get(0, 1), unpack_rgb565(words[3]));
    assert_eq!(decoded.get(2, 1), unpack_rgb565(words[5]));
}

#[test]
fn decode_then_reencode_reproduces_the_blob() {
    let words: [u16; 4] = [0x0000, 0xFFFF, 0x1234, 0xABCD];

    let mut little = vec![0x02, 0x00, 0x02, 0x00];
    let mut big = vec![0x00, 0x02, 0x00, 0x02];
    for word in words {
        little.extend_from_slice(&word.to_le_bytes());
        big.extend_from_slice(&word.to_be_bytes());
    }

    let decoded = decode::<LittleEndian>(&little).unwrap();
    let mut reencoded = Vec::new();
    encode_to_vec::<LittleEndian>(&decoded, &mut reencoded).unwrap();
    assert_eq!(little, reencoded);

    let decoded = decode::<BigEndian>(&big).unwrap();
    let mut reencoded = Vec::new();
    encode_to_vec::<BigEndian>(&decoded, &mut reencoded).unwrap();
    assert_eq!(big, reencoded);
}

#[test]
fn writer_api_matches_vec_api() {
    let image = image_from_pixels(2, 1, &[[10, 20, 30], [200, 100, 50]]);

    let mut via_vec = Vec::new();
    encode_to_vec::<BigEndian>(&image, &mut via_vec).unwrap();

    let mut via_writer = Vec::new();
    encode::<BigEndian, _>(&image, &mut via_writer).unwrap();

    assert_eq!(via_vec, via_writer);
}

#[test]
fn header_codec_roundtrip() {
    let header = Header {
        width: 0x1234,
        height: 0xABCD,
    };

    let bytes = header.encode::<LittleEndian>();
    assert_eq!(bytes, [0x34, 0x12, 0xCD, 0xAB]);
    let (parsed, rest) = Header::decode::<LittleEndian>(&bytes).unwrap();
    assert_eq!(parsed, header);
    assert!(rest.is_empty());

    let bytes = header.encode::<BigEndian>();
    assert_eq!(bytes, [0x12, 0x34, 0xAB, 0xCD]);
    let (parsed, _) = Header::decode::<BigEndian>(&bytes).unwrap();
    assert_eq!(parsed, header);
}

#[test]
fn raster_get_set() {
    let mut image = Rgb888Image::new(2, 3);
    image.set(1, 2, [9, 8, 7]);
    assert_eq!(image.get(1, 2), [9, 8, 7]);
    assert_eq!(image.get(0, 0), [0, 0, 0]);
    assert_eq!(image.pixels().count(), 6);
}
