use macroquad::prelude::*;

/// What a panel button does when clicked
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    PlayPause,
    Step,
    Reset,
    Clear,
    Algorithm,
}

impl ButtonAction {
    pub const ALL: [ButtonAction; 5] = [
        ButtonAction::PlayPause,
        ButtonAction::Step,
        ButtonAction::Reset,
        ButtonAction::Clear,
        ButtonAction::Algorithm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ButtonAction::PlayPause => "Play/Pause [Space]",
            ButtonAction::Step => "Step [E]",
            ButtonAction::Reset => "Reset [R]",
            ButtonAction::Clear => "Clear [C]",
            ButtonAction::Algorithm => "Algorithm [Tab]",
        }
    }
}

/// Panel button with hover highlight
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    pub action: ButtonAction,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, action: ButtonAction) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            action,
        }
    }

    pub fn is_hovered(&self, mouse_pos: (f32, f32)) -> bool {
        self.rect.contains(vec2(mouse_pos.0, mouse_pos.1))
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let fill = if self.is_hovered(mouse_pos) {
            Color::from_rgba(40, 90, 150, 255)
        } else {
            Color::from_rgba(20, 50, 100, 255)
        };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, fill);
        draw_rectangle_lines(x, y, w, h, 1.5, Color::from_rgba(0, 255, 150, 160));

        let label = self.action.label();
        let size = measure_text(label, None, 16, 1.0);
        draw_text(label, x + (w - size.width) / 2.0, y + (h + size.height) / 2.0, 16.0, WHITE);
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}
