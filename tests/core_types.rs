use cssmap::{
    BoundaryConfig, Contour, CssConfig, CssError, DemoShape, GaussianKernel, ImageView,
    OwnedImage, Point, ScaleGrid, ZeroCrossingMode,
};

#[test]
fn image_view_rejects_invalid_dimensions() {
    let data = [0u8; 4];

    let err = ImageView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(
        err,
        CssError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );

    let err = ImageView::from_slice(&data, 1, 0).err().unwrap();
    assert_eq!(
        err,
        CssError::InvalidDimensions {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn image_view_rejects_small_buffer() {
    let data = [0u8; 3];

    let err = ImageView::from_slice(&data, 2, 2).err().unwrap();
    assert_eq!(err, CssError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn image_view_indexes_rows() {
    let data: Vec<u8> = (0u8..12).collect();
    let view = ImageView::from_slice(&data, 4, 3).unwrap();
    assert_eq!(view.get(2, 2), Some(&10));
    assert_eq!(view.get(3, 1), Some(&7));
    assert_eq!(view.get(4, 0), None);
    assert_eq!(view.get(0, 3), None);
}

#[test]
fn owned_image_requires_exact_buffer() {
    let img = OwnedImage::new(vec![7u8; 6], 3, 2).unwrap();
    assert_eq!(img.view().get(2, 1), Some(&7));
    assert_eq!(
        OwnedImage::new(vec![0u8; 5], 3, 2).unwrap_err(),
        CssError::BufferTooSmall { needed: 6, got: 5 }
    );
    assert_eq!(
        OwnedImage::new(vec![0u8; 7], 3, 2).unwrap_err(),
        CssError::InvalidDimensions {
            width: 3,
            height: 2,
        }
    );
}

#[test]
fn contour_from_xy_checks_lengths_and_values() {
    let err = Contour::from_xy(&[0.0, 1.0], &[0.0]).unwrap_err();
    assert_eq!(err, CssError::LengthMismatch { x_len: 2, y_len: 1 });

    let err = Contour::from_xy(&[0.0, 1.0, 2.0], &[0.0, f64::NAN, 1.0]).unwrap_err();
    assert_eq!(err, CssError::NonFiniteCoordinate { index: 1 });

    let c = Contour::from_xy(&[0.0, 1.0, 1.0], &[0.0, 0.0, 1.0]).unwrap();
    assert_eq!(c.points()[2], Point::new(1.0, 1.0));
    assert_eq!(c.at(3), Point::new(0.0, 0.0));
}

#[test]
fn gaussian_kernel_rejects_negative_scale() {
    assert_eq!(
        GaussianKernel::new(-2.0).unwrap_err(),
        CssError::InvalidScale { sigma: -2.0 }
    );
    let k = GaussianKernel::new(2.0).unwrap();
    assert_eq!(k.len(), 13);
    assert_eq!(k.sigma(), 2.0);
}

#[test]
fn css_config_validation() {
    assert!(CssConfig::default().validate().is_ok());

    let bad = [
        CssConfig {
            max_sigma: -1.0,
            ..CssConfig::default()
        },
        CssConfig {
            max_sigma: f64::NAN,
            ..CssConfig::default()
        },
        CssConfig {
            num_scales: 0,
            ..CssConfig::default()
        },
        CssConfig {
            curvature_eps: f64::INFINITY,
            ..CssConfig::default()
        },
    ];
    for cfg in bad {
        assert!(matches!(
            cfg.validate(),
            Err(CssError::InvalidConfig { .. })
        ));
    }

    let inclusive = CssConfig {
        zero_crossing: ZeroCrossingMode::Inclusive,
        ..CssConfig::default()
    };
    assert!(inclusive.validate().is_ok());
    assert_eq!(inclusive.grid().unwrap(), ScaleGrid::new(100.0, 50).unwrap());
}

#[test]
fn boundary_config_defaults() {
    let cfg = BoundaryConfig::default();
    assert_eq!(cfg.threshold, 128);
    assert_eq!(cfg.target_points, 150);
    assert_eq!(cfg.points_per_side, 25);
    assert_eq!(cfg.max_dimension, 600);
    assert!(cfg.validate().is_ok());
}

#[test]
fn demo_shapes_round_trip_names() {
    for shape in DemoShape::ALL {
        assert_eq!(DemoShape::from_name(shape.name()), Some(shape));
        assert!(!shape.contour().is_empty());
    }
}

#[test]
fn errors_render_messages() {
    let err = CssError::InvalidScale { sigma: -1.0 };
    assert!(err.to_string().contains("-1"));
    let err = CssError::InvalidConfig {
        reason: "num_scales must be > 0",
    };
    assert_eq!(err.to_string(), "invalid config: num_scales must be > 0");
}
