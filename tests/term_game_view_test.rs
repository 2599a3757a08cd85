use tui_stage::core::{ScriptedSource, Stage};
use tui_stage::term::{GameView, Tone, Viewport};
use tui_stage::types::{CellState, PieceKind, Rotation};

fn o_stage() -> Stage<ScriptedSource> {
    Stage::new(ScriptedSource::pieces(&[(PieceKind::O, Rotation::North)]))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = o_stage().snapshot();
    let view = GameView::default();

    // cell_w=2: board is 20x20, plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_fixed_cell_as_two_chars_wide() {
    let mut snap = o_stage().snapshot();
    snap.board[19][0] = CellState::Fixed;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let y0 = 1 + 19;
    for x in [1, 2] {
        let cell = fb.get(x, y0).unwrap();
        assert_eq!(cell.ch, '▓');
        assert_eq!(cell.tone, Tone::Fixed);
    }
    assert_eq!(fb.get(3, y0).unwrap().tone, Tone::Floor);
}

#[test]
fn term_view_draws_falling_piece_and_shadow() {
    let snap = o_stage().snapshot();
    assert_eq!(snap.shadow_y, 18);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // O piece spawns at column 3 => terminal columns 7..=10
    for x in 7..=10 {
        assert_eq!(fb.get(x, 1).unwrap().ch, '█');
        assert_eq!(fb.get(x, 2).unwrap().tone, Tone::Falling);
        assert_eq!(fb.get(x, 1 + 18).unwrap().ch, '░');
        assert_eq!(fb.get(x, 1 + 19).unwrap().tone, Tone::Shadow);
    }
    assert_eq!(fb.get(5, 1 + 19).unwrap().tone, Tone::Floor);
}

#[test]
fn term_view_shadow_never_covers_the_piece() {
    let mut stage = o_stage();
    stage.input(tui_stage::types::Key::HardDrop);
    let snap = stage.snapshot();
    assert_eq!(snap.shadow_y, snap.active.y);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    assert!(!fb.to_text().contains('░'));
    assert_eq!(fb.get(7, 1 + 19).unwrap().tone, Tone::Falling);
}

#[test]
fn term_view_renders_game_over_frame() {
    let mut snap = o_stage().snapshot();
    snap.board[19][0] = CellState::Fixed;
    snap.is_end = true;

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    let text = fb.to_text();

    assert!(text.contains("GAME OVER"));
    assert!(!text.contains('░'));
    assert!(!text.contains('█'));
    assert_eq!(fb.get(1, 20).unwrap().tone, Tone::GameOver);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = o_stage().snapshot();
    snap.locked_pieces = 12;
    snap.cleared_lines = 3;
    snap.can_drop = false;

    let fb = GameView::default().render(&snap, Viewport::new(60, 22));

    let text = fb.to_text();
    assert!(text.contains("LOCKED"));
    assert!(text.contains("12"));
    assert!(text.contains("LINES"));
    assert!(text.contains("OFF"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = o_stage().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(30, 22));
    assert!(!fb.to_text().contains("LOCKED"));
}

#[test]
fn term_view_centers_board_in_viewport() {
    let snap = o_stage().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 25).unwrap().ch, '┘');
    assert_eq!(fb.get(0, 0).unwrap().tone, Tone::Blank);
}
