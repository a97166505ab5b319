//! End-to-end generation tests.
//!
//! Drive `generate_all` against temp directories and decode the written PNGs.
//! Tests that need a real outline font skip when none is installed.

use std::fs;
use std::path::{Path, PathBuf};

use menuicon_backend_raster::resolve_font;
use menuicon_cli::commands::generate::generate_all;
use menuicon_spec::{CategoryIcon, CategoryTable, RenderParams};

const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    r"C:\Windows\Fonts\arial.ttf",
];

fn system_font() -> Option<PathBuf> {
    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

fn decode_rgba(path: &Path) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(fs::File::open(path).unwrap());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}

/// Bounding box of non-transparent pixels: (min_x, min_y, max_x, max_y).
fn ink_box(width: u32, pixels: &[u8]) -> Option<(u32, u32, u32, u32)> {
    let mut bbox: Option<(u32, u32, u32, u32)> = None;
    for (i, px) in pixels.chunks(4).enumerate() {
        if px[3] == 0 {
            continue;
        }
        let (x, y) = (i as u32 % width, i as u32 / width);
        bbox = Some(match bbox {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bbox
}

#[test]
fn fruit_icon_without_font_is_created() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("icons");
    let params = RenderParams::default();
    let table =
        CategoryTable::new(vec![CategoryIcon::new("fruit", "🍹", "果茶", "#FF6B6B")]).unwrap();
    let font = resolve_font(&tmp.path().join("missing.ttf"), params.font_size);

    let summary = generate_all(&table, &out, &font, &params, true).unwrap();
    assert_eq!(summary.paths(), vec![out.join("fruit.png").as_path()]);

    let (w, h, pixels) = decode_rgba(&out.join("fruit.png"));
    assert_eq!((w, h), (64, 64));

    // Placeholder box 25x35 centered at (19, 14)
    assert_eq!(ink_box(w, &pixels), Some((19, 14, 43, 48)));
}

#[test]
fn builtin_table_produces_every_file() {
    let tmp = tempfile::tempdir().unwrap();
    let params = RenderParams::default();
    let font = resolve_font(&tmp.path().join("missing.ttf"), params.font_size);
    let table = CategoryTable::builtin();

    generate_all(&table, tmp.path(), &font, &params, true).unwrap();

    let mut names: Vec<String> = fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "breakfast.png",
            "coffee.png",
            "dessert.png",
            "fruit.png",
            "ice.png",
            "milktea.png",
            "snack.png",
            "tea.png",
        ]
    );
}

#[test]
fn outline_font_glyph_is_centered() {
    let Some(font_path) = system_font() else {
        eprintln!("skipping: no system TrueType font found");
        return;
    };

    let tmp = tempfile::tempdir().unwrap();
    let params = RenderParams::default();
    let font = resolve_font(&font_path, params.font_size);
    assert!(!font.is_fallback(), "{:?}", font.fallback_reason());

    let table = CategoryTable::new(vec![CategoryIcon::new("letter", "H", "", "#123456")]).unwrap();
    let summary = generate_all(&table, tmp.path(), &font, &params, true).unwrap();
    assert!(summary.icons[0].missing_glyphs.is_empty());

    let (w, h, pixels) = decode_rgba(&tmp.path().join("letter.png"));
    assert_eq!((w, h), (64, 64));

    let (x0, y0, x1, y1) = ink_box(w, &pixels).expect("glyph should leave ink");
    // Ink box centered within a pixel or two of rounding
    let left_margin = x0 as i32;
    let right_margin = (w - 1 - x1) as i32;
    let top_margin = y0 as i32;
    let bottom_margin = (h - 1 - y1) as i32;
    assert!((left_margin - right_margin).abs() <= 2, "{} vs {}", left_margin, right_margin);
    assert!((top_margin - bottom_margin).abs() <= 2, "{} vs {}", top_margin, bottom_margin);

    // Fully covered pixels are opaque black; edges blend toward the background
    for px in pixels.chunks(4).filter(|p| p[3] == 255) {
        assert_eq!(&px[..3], &[0, 0, 0]);
    }
}

#[test]
fn outline_font_output_is_reproducible() {
    let Some(font_path) = system_font() else {
        eprintln!("skipping: no system TrueType font found");
        return;
    };

    let tmp = tempfile::tempdir().unwrap();
    let params = RenderParams::default();
    let table = CategoryTable::new(vec![CategoryIcon::new("letter", "Rx", "", "#123456")]).unwrap();

    let first = generate_all(
        &table,
        &tmp.path().join("a"),
        &resolve_font(&font_path, params.font_size),
        &params,
        true,
    )
    .unwrap();
    let second = generate_all(
        &table,
        &tmp.path().join("b"),
        &resolve_font(&font_path, params.font_size),
        &params,
        true,
    )
    .unwrap();

    assert_eq!(first.icons[0].hash, second.icons[0].hash);
    assert_eq!(
        fs::read(tmp.path().join("a/letter.png")).unwrap(),
        fs::read(tmp.path().join("b/letter.png")).unwrap()
    );
}

#[test]
fn blank_outline_glyph_is_reported_missing() {
    let Some(font_path) = system_font() else {
        eprintln!("skipping: no system TrueType font found");
        return;
    };

    let tmp = tempfile::tempdir().unwrap();
    let params = RenderParams::default();
    let font = resolve_font(&font_path, params.font_size);
    assert!(!font.is_fallback(), "{:?}", font.fallback_reason());

    // Braille blank: mapped by common fonts, but has no outline
    let table =
        CategoryTable::new(vec![CategoryIcon::new("blank", "\u{2800}", "", "#123456")]).unwrap();
    let summary = generate_all(&table, tmp.path(), &font, &params, true).unwrap();

    assert_eq!(summary.icons[0].missing_glyphs, vec!['\u{2800}']);
    if font.font().has_glyph('\u{2800}') {
        let (w, _, pixels) = decode_rgba(&tmp.path().join("blank.png"));
        assert_eq!(ink_box(w, &pixels), None);
    }
}
