use super::*;
use crate::foundation::core::Intensity;

#[test]
fn empty_descriptor_is_none() {
    let d = FilterDescriptor::default();
    assert!(d.is_neutral());
    assert_eq!(d.to_string(), "none");
}

#[test]
fn fragments_drop_identity_primitives() {
    let f = FilterFragment::new(
        FragmentSource::Cataract,
        [
            FilterPrimitive::Blur { radius_px: 0.0 },
            FilterPrimitive::Contrast { percent: 100.0 },
            FilterPrimitive::Sepia { percent: 30.0 },
        ],
    )
    .unwrap();
    assert_eq!(f.primitives.len(), 1);

    assert!(
        FilterFragment::new(
            FragmentSource::RefractiveBlur,
            [FilterPrimitive::HueRotate { deg: 0.0 }]
        )
        .is_none()
    );
}

#[test]
fn display_joins_primitives_as_css() {
    let d = FilterDescriptor {
        fragments: vec![
            FilterFragment::new(
                FragmentSource::RefractiveBlur,
                [FilterPrimitive::Blur { radius_px: 2.5 }],
            )
            .unwrap(),
            FilterFragment::new(
                FragmentSource::Cataract,
                [
                    FilterPrimitive::Sepia { percent: 30.0 },
                    FilterPrimitive::HueRotate { deg: -12.125 },
                ],
            )
            .unwrap(),
        ],
    };
    assert_eq!(d.to_string(), "blur(2.5px) sepia(30%) hue-rotate(-12.125deg)");
}

#[test]
fn color_matrices_are_referenced_by_url() {
    let m = ColorMatrix::for_condition(ConditionKind::Deuteranopia, Intensity::new(0.25)).unwrap();
    let id = m.svg_id();
    assert!(id.starts_with("cvd-deuteranopia-25-"));
    let d = FilterDescriptor {
        fragments: vec![
            FilterFragment::new(FragmentSource::ColorVision, [FilterPrimitive::ColorMatrix(m)])
                .unwrap(),
        ],
    };
    assert_eq!(d.to_string(), format!("url(#{id})"));
    let svg = d.svg_color_matrices();
    assert_eq!(svg.len(), 1);
    assert_eq!(svg[0].0, id);
}

#[test]
fn num_trims_trailing_zeros() {
    assert_eq!(Num(100.0).to_string(), "100");
    assert_eq!(Num(0.5).to_string(), "0.5");
    assert_eq!(Num(-0.0001).to_string(), "0");
    assert_eq!(Num(f64::NAN).to_string(), "0");
    assert_eq!(Num(1.23456).to_string(), "1.235");
}
