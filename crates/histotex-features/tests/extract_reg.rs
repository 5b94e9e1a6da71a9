//! Feature extraction regression test
//!
//! Runs the single-pass driver over a synthetic dataset and checks row
//! counts, row widths, and per-feature behavior end to end.

use histotex_core::FeatureConfig;
use histotex_dataset::Dataset;
use histotex_features::extract;
use histotex_test::TempDataset;

fn config() -> FeatureConfig {
    FeatureConfig {
        shape: (24, 32),
        ..FeatureConfig::default()
    }
}

#[test]
fn extract_reg() {
    let fixture = TempDataset::new().expect("temp dataset");
    fixture
        .add_solid_png("data/flat.png", [120, 120, 120], 16, 12)
        .expect("flat.png");
    fixture
        .add_split_png("data/split.png", [0, 0, 0], [255, 255, 255], 16, 12)
        .expect("split.png");
    fixture
        .add_solid_png("data/bright.jpg", [250, 250, 250], 16, 12)
        .expect("bright.jpg");
    fixture.add_text_file("data/readme.txt").expect("readme");

    let config = config();
    let ds = Dataset::new(fixture.path("data"), &config);

    // --- Test 1: 3 valid images + 1 disallowed extension -> 3 rows ---
    let mut order = Vec::new();
    let maps = extract(&ds, &config, |i, path| {
        order.push((i, path.to_path_buf()));
    })
    .expect("extract");
    assert_eq!(maps.len(), 3);
    assert_eq!(order.len(), 3);

    // --- Test 2: row widths follow the config ---
    assert_eq!(maps.lbp.dim(), (3, 24 * 32));
    assert_eq!(maps.sobel.dim(), (3, 24 * 32));
    assert_eq!(maps.glcm.dim(), (3, 256 * 256 * 5));
    assert_eq!(maps.contrast.dim(), (3, 5));

    // --- Test 3: row order matches traversal order ---
    let walked: Vec<_> = ds.walk().collect();
    for (i, path) in &order {
        assert_eq!(&walked[*i], path);
    }

    // --- Test 4: flat images have zero contrast, the split image does not ---
    let flat_row = order
        .iter()
        .find(|(_, p)| p.ends_with("flat.png"))
        .map(|(i, _)| *i)
        .expect("flat row");
    let split_row = order
        .iter()
        .find(|(_, p)| p.ends_with("split.png"))
        .map(|(i, _)| *i)
        .expect("split row");
    assert!(maps.contrast.row(flat_row).iter().all(|&v| v == 0.0));
    assert!(maps.contrast.row(split_row).iter().any(|&v| v > 0.0));

    // --- Test 5: the split image produces a Sobel edge, the flat one none ---
    assert!(maps.sobel.row(flat_row).iter().all(|&v| v == 0));
    assert!(maps.sobel.row(split_row).iter().any(|&v| v > 0));

    // --- Test 6: cutoff bounds the row count ---
    let bounded = FeatureConfig {
        cutoff: Some(2),
        ..config
    };
    let maps = extract(&ds, &bounded, |_, _| {}).expect("extract with cutoff");
    assert_eq!(maps.len(), 2);
}
