#![cfg(feature = "rayon")]

use cssmap::{CssBuilder, CssConfig, DemoShape, ZeroCrossingMode};

fn builders(mode: ZeroCrossingMode) -> (CssBuilder, CssBuilder) {
    let base = CssConfig {
        zero_crossing: mode,
        ..CssConfig::default()
    };
    let seq = CssBuilder::new().with_config(CssConfig {
        parallel: false,
        ..base.clone()
    });
    let par = CssBuilder::new().with_config(CssConfig {
        parallel: true,
        ..base
    });
    (seq, par)
}

#[test]
fn parallel_sweep_matches_sequential() {
    for mode in [ZeroCrossingMode::Strict, ZeroCrossingMode::Inclusive] {
        let (seq, par) = builders(mode);
        for shape in DemoShape::ALL {
            let contour = shape.contour();
            let expected = seq.build(&contour).unwrap();
            let actual = par.build(&contour).unwrap();
            assert_eq!(expected, actual, "{} {:?}", shape.name(), mode);
        }
    }
}

#[test]
fn parallel_sweep_keeps_scale_order() {
    let (_, par) = builders(ZeroCrossingMode::Inclusive);
    let map = par.build(&DemoShape::Rectangle.contour()).unwrap();
    assert!(!map.is_empty());
    assert!(map
        .entries()
        .windows(2)
        .all(|w| (w[0].scale_idx, w[0].position) < (w[1].scale_idx, w[1].position)));
}
