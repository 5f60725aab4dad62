//! Unit tests for layout parsing, extraction, and generation.

#[cfg(test)]
mod parsing {
    use crate::{Cell, Layout, LayoutError};

    #[test]
    fn rows_are_right_padded_to_longest() {
        let layout = Layout::parse("XXXX\nX\nXX").unwrap();
        assert_eq!(layout.width(), 4);
        assert_eq!(layout.height(), 3);
        // Padding is floor, not wall.
        assert_eq!(layout.cell(1, 3), Cell::Empty);
        assert_eq!(layout.cell(2, 1), Cell::Wall);
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(Layout::parse(""), Err(LayoutError::EmptyLayout));
        assert_eq!(Layout::parse("\n\n"), Err(LayoutError::EmptyLayout));
    }

    #[test]
    fn unknown_chars_read_as_floor() {
        let layout = Layout::parse("X?zE").unwrap();
        assert_eq!(layout.cell(0, 1), Cell::Empty);
        assert_eq!(layout.cell(0, 2), Cell::Empty);
        assert_eq!(layout.cell(0, 3), Cell::Exit);
    }

    #[test]
    fn leading_blanks_are_cells_trailing_are_dropped() {
        let layout = Layout::parse("  X   \nXXXX").unwrap();
        assert_eq!(layout.width(), 4);
        assert_eq!(layout.cell(0, 0), Cell::Empty);
        assert_eq!(layout.cell(0, 2), Cell::Wall);
    }

    #[test]
    fn missing_exit_only_fails_at_extraction() {
        let layout = Layout::parse("XXX\nX@X\nXXX").unwrap();
        assert_eq!(layout.scene().unwrap_err(), LayoutError::MissingExit);
    }

    #[test]
    fn display_roundtrip() {
        let text = "XXEX\nX.@X\nXXXX\n";
        let layout = Layout::parse(text).unwrap();
        assert_eq!(layout.to_string(), text);
        assert_eq!(Layout::parse(&layout.to_string()).unwrap(), layout);
    }
}

#[cfg(test)]
mod scene {
    use egress_core::Vec2;

    use crate::{Layout, Wall};

    #[test]
    fn entity_coordinates_flip_rows() {
        // 3 rows: E at storage (0, 1), @ at (1, 1), walls elsewhere.
        let layout = Layout::parse("XEX\nX@X\nXXX").unwrap();
        let scene = layout.scene().unwrap();

        assert_eq!(scene.exit, Vec2::new(1.5, 2.5));
        assert_eq!(scene.spawns, vec![Vec2::new(1.5, 1.5)]);
        assert_eq!(scene.width, 3);
        assert_eq!(scene.height, 3);
        // 9 cells minus one exit minus one spawn.
        assert_eq!(scene.walls.len(), 7);
    }

    #[test]
    fn wall_rectangle_spans_its_cell() {
        let layout = Layout::parse("E..\n.X.\n...").unwrap();
        let scene = layout.scene().unwrap();
        assert_eq!(scene.walls.len(), 1);
        let wall = scene.walls[0];
        // Storage (row 1, col 1) in a height-3 grid → [1,2] × [1,2].
        assert_eq!((wall.x0, wall.y0, wall.x1, wall.y1), (1.0, 1.0, 2.0, 2.0));
    }

    #[test]
    fn last_exit_in_scan_order_wins() {
        let layout = Layout::parse("E..\n...\n..E").unwrap();
        let scene = layout.scene().unwrap();
        // Storage (2, 2) in a height-3 grid → (2.5, 0.5).
        assert_eq!(scene.exit, Vec2::new(2.5, 0.5));
    }

    #[test]
    fn open_rectangle_excludes_boundary() {
        let wall = Wall { x0: 1.0, y0: 1.0, x1: 2.0, y1: 2.0 };
        assert!(wall.contains_open(Vec2::new(1.5, 1.5)));
        assert!(!wall.contains_open(Vec2::new(1.0, 1.5)));
        assert!(!wall.contains_open(Vec2::new(1.5, 2.0)));
        assert!(!wall.contains_open(Vec2::new(2.0, 2.0)));
        assert!(!wall.contains_open(Vec2::new(0.5, 1.5)));
    }
}

#[cfg(test)]
mod generator {
    use egress_core::SimRng;

    use crate::{Cell, GeneratorConfig, generate};

    #[test]
    fn output_reparses_with_a_scene() {
        let mut rng = SimRng::new(42);
        let layout = generate(&GeneratorConfig::default(), &mut rng).unwrap();
        let reparsed = crate::Layout::parse(&layout.to_string()).unwrap();
        let scene = reparsed.scene().unwrap();
        assert!(!scene.walls.is_empty());
        assert!((10..=30).contains(&scene.spawns.len()));
    }

    #[test]
    fn border_is_wall_or_exit() {
        let mut rng = SimRng::new(7);
        let layout = generate(&GeneratorConfig::default(), &mut rng).unwrap();
        let (w, h) = (layout.width(), layout.height());
        for col in 0..w {
            for row in [0, h - 1] {
                let c = layout.cell(row, col);
                assert!(c == Cell::Wall || c == Cell::Exit, "({row},{col}) = {c:?}");
            }
        }
        for row in 0..h {
            for col in [0, w - 1] {
                let c = layout.cell(row, col);
                assert!(c == Cell::Wall || c == Cell::Exit, "({row},{col}) = {c:?}");
            }
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = generate(&GeneratorConfig::default(), &mut SimRng::new(1234)).unwrap();
        let b = generate(&GeneratorConfig::default(), &mut SimRng::new(1234)).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn tiny_requests_are_clamped() {
        let cfg = GeneratorConfig { width: 1, height: 1 };
        let layout = generate(&cfg, &mut SimRng::new(0)).unwrap();
        assert!(layout.width() >= 8 && layout.height() >= 8);
    }
}
