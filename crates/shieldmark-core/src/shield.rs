//! The compiled-in Contoso shield artwork.
//!
//! Ten shape groups reproduce the fixed company logo: the four black
//! letter glyphs, the two-tone shield body, and the four foreground bars.
//! The coordinate lists carry the reference artwork verbatim, duplicate
//! vertices included.

use crate::artwork::{Artwork, ShapeGroup};
use crate::color::Rgba;
use crate::geometry::{Point, Transform2D};

/// Native width of the shield artwork surface.
pub const SHIELD_WIDTH: u32 = 250;
/// Native height of the shield artwork surface.
pub const SHIELD_HEIGHT: u32 = 275;

const INK: Rgba = Rgba::rgb(0x00, 0x00, 0x00);
const SHIELD_DARK: Rgba = Rgba::rgb(0xE4, 0x4D, 0x26);
const SHIELD_LIGHT: Rgba = Rgba::rgb(0xF1, 0x65, 0x29);
const BAR_DARK: Rgba = Rgba::rgb(0xEB, 0xEB, 0xEB);
const BAR_LIGHT: Rgba = Rgba::rgb(0xFF, 0xFF, 0xFF);

const LETTER_H: &[(f64, f64)] = &[
    (52.5, 0.0),
    (63.7, 0.0),
    (63.7, 11.0),
    (73.9, 11.0),
    (73.9, 0.0),
    (85.1, 0.0),
    (85.1, 33.4),
    (73.9, 33.4),
    (73.9, 22.2),
    (63.7, 22.2),
    (63.7, 33.4),
    (52.5, 33.4),
    (52.5, 0.0),
];

const LETTER_T: &[(f64, f64)] = &[
    (99.8, 11.1),
    (90.0, 11.1),
    (90.0, 0.0),
    (120.8, 0.0),
    (120.8, 11.1),
    (111.0, 11.1),
    (111.0, 33.4),
    (99.8, 33.4),
    (99.8, 11.1),
];

const LETTER_M: &[(f64, f64)] = &[
    (125.7, 0.0),
    (137.3, 0.0),
    (144.5, 11.8),
    (151.7, 0.0),
    (163.4, 0.0),
    (163.4, 33.4),
    (152.2, 33.4),
    (152.2, 16.9),
    (144.5, 28.8),
    (136.6, 16.9),
    (136.6, 33.4),
    (125.7, 33.4),
    (125.7, 0.0),
];

const LETTER_L: &[(f64, f64)] = &[
    (168.9, 0.0),
    (180.1, 0.0),
    (180.1, 22.4),
    (195.7, 22.4),
    (195.7, 33.4),
    (168.9, 33.4),
    (168.9, 0.0),
];

const SHIELD_BODY_DARK: &[(f64, f64)] = &[
    (52.1, 228.2),
    (36.2, 48.7),
    (211.8, 48.7),
    (195.9, 228.2),
    (123.9, 248.0),
];

const SHIELD_BODY_LIGHT: &[(f64, f64)] = &[
    (124.0, 232.6),
    (182.1, 216.6),
    (195.9, 63.4),
    (124.0, 63.4),
];

const BAR_DARK_UPPER: &[(f64, f64)] = &[
    (124.0, 129.9),
    (94.9, 129.9),
    (92.9, 107.4),
    (124.0, 107.4),
    (124.0, 85.4),
    (123.9, 85.4),
    (68.9, 85.4),
    (69.4, 91.3),
    (74.8, 151.9),
    (124.0, 151.9),
];

const BAR_DARK_LOWER: &[(f64, f64)] = &[
    (124.0, 187.0),
    (123.9, 187.0),
    (99.4, 180.5),
    (97.8, 162.9),
    (85.9, 162.9),
    (75.8, 162.9),
    (78.8, 197.5),
    (123.9, 210.0),
    (124.0, 210.0),
];

const BAR_LIGHT_LOWER: &[(f64, f64)] = &[
    (123.9, 129.9),
    (123.9, 151.9),
    (151.0, 151.9),
    (148.4, 180.5),
    (123.9, 187.0),
    (123.9, 210.0),
    (169.1, 197.5),
    (169.4, 193.8),
    (174.5, 135.8),
    (175.0, 129.9),
    (169.2, 129.9),
];

const BAR_LIGHT_UPPER: &[(f64, f64)] = &[
    (123.9, 85.4),
    (123.9, 99.0),
    (123.9, 107.4),
    (123.9, 107.4),
    (177.0, 107.4),
    (177.0, 107.4),
    (177.0, 107.4),
    (177.5, 102.4),
    (178.5, 91.3),
    (179.1, 85.4),
];

fn outline(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

/// Build the Contoso shield artwork.
///
/// Group order is the drawing order and must not change: letters, shield
/// body back-to-front, then the foreground bars.
pub fn contoso_shield() -> Artwork {
    let mut art = Artwork::new("contoso-shield", SHIELD_WIDTH, SHIELD_HEIGHT);

    art.add_group(ShapeGroup::new("letter-h", INK, outline(LETTER_H)));
    art.add_group(ShapeGroup::new("letter-t", INK, outline(LETTER_T)));
    art.add_group(ShapeGroup::new("letter-m", INK, outline(LETTER_M)));
    art.add_group(ShapeGroup::new("letter-l", INK, outline(LETTER_L)));
    art.add_group(ShapeGroup::new(
        "shield-dark",
        SHIELD_DARK,
        outline(SHIELD_BODY_DARK),
    ));
    art.add_group(ShapeGroup::new(
        "shield-light",
        SHIELD_LIGHT,
        outline(SHIELD_BODY_LIGHT),
    ));
    art.add_group(ShapeGroup::new(
        "bar-dark-upper",
        BAR_DARK,
        outline(BAR_DARK_UPPER),
    ));
    art.add_group(ShapeGroup::new(
        "bar-dark-lower",
        BAR_DARK,
        outline(BAR_DARK_LOWER),
    ));
    art.add_group(ShapeGroup::new(
        "bar-light-lower",
        BAR_LIGHT,
        outline(BAR_LIGHT_LOWER),
    ));
    // The reference artwork scales only this final group down to 20%, a
    // leftover of its drawing routine. Preserved, not corrected.
    art.add_group(
        ShapeGroup::new("bar-light-upper", BAR_LIGHT, outline(BAR_LIGHT_UPPER))
            .with_transform(Transform2D::scale(0.2, 0.2)),
    );

    art
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_count_and_order() {
        let art = contoso_shield();
        assert_eq!(art.group_count(), 10);
        let names: Vec<&str> = art.groups().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "letter-h",
                "letter-t",
                "letter-m",
                "letter-l",
                "shield-dark",
                "shield-light",
                "bar-dark-upper",
                "bar-dark-lower",
                "bar-light-lower",
                "bar-light-upper",
            ]
        );
    }

    #[test]
    fn test_palette_first_use_order() {
        let art = contoso_shield();
        let hex: Vec<String> = art.palette().iter().map(|c| c.to_hex()).collect();
        assert_eq!(
            hex,
            vec!["#000000", "#E44D26", "#F16529", "#EBEBEB", "#FFFFFF"]
        );
    }

    #[test]
    fn test_native_dimensions() {
        let art = contoso_shield();
        assert_eq!(art.width, 250);
        assert_eq!(art.height, 275);
    }

    #[test]
    fn test_only_final_group_is_scaled() {
        let art = contoso_shield();
        let (last, rest) = art.groups().split_last().unwrap();
        assert!(rest.iter().all(|g| g.transform.is_identity()));
        assert_eq!(last.transform, Transform2D::scale(0.2, 0.2));
    }

    #[test]
    fn test_artwork_fits_native_surface() {
        let art = contoso_shield();
        let bb = art.bbox().unwrap();
        assert!(bb.min.x >= 0.0 && bb.min.y >= 0.0);
        assert!(bb.max.x <= SHIELD_WIDTH as f64);
        assert!(bb.max.y <= SHIELD_HEIGHT as f64);
    }
}
