//! Mouse input: pointer position to player paddle target

/// Ratio of canvas pixels to CSS pixels, for canvases scaled by CSS
pub fn surface_scale(surface_height: f32, css_height: f32) -> f32 {
    if css_height > 0.0 {
        surface_height / css_height
    } else {
        1.0
    }
}

/// Paddle centre target, in surface pixels, for a pointer at `client_y`
pub fn pointer_to_target(client_y: f32, surface_top: f32, scale: f32) -> f32 {
    (client_y - surface_top) * scale
}

#[cfg(target_arch = "wasm32")]
pub use listener::{attach_pointer, PointerListener};

#[cfg(target_arch = "wasm32")]
mod listener {
    use super::{pointer_to_target, surface_scale};
    use crate::ClientError;
    use game_core::Match;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{HtmlCanvasElement, MouseEvent};

    /// A `mousemove` listener on the canvas, removed when dropped
    pub struct PointerListener {
        canvas: HtmlCanvasElement,
        on_move: Closure<dyn FnMut(MouseEvent)>,
    }

    impl Drop for PointerListener {
        fn drop(&mut self) {
            if let Err(e) = self
                .canvas
                .remove_event_listener_with_callback("mousemove", self.on_move.as_ref().unchecked_ref())
            {
                log::warn!("failed to remove mousemove listener: {e:?}");
            }
        }
    }

    /// Queue a player target on every `mousemove` over the canvas
    pub fn attach_pointer(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Match>>,
    ) -> Result<PointerListener, ClientError> {
        let target = canvas.clone();
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let scale = surface_scale(target.height() as f32, rect.height() as f32);
            let center_y = pointer_to_target(event.client_y() as f32, rect.top() as f32, scale);
            game.borrow_mut().set_player_target(center_y);
        });

        canvas.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
        Ok(PointerListener {
            canvas: canvas.clone(),
            on_move,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_relative_to_canvas_top() {
        assert_eq!(pointer_to_target(350.0, 100.0, 1.0), 250.0);
    }

    #[test]
    fn test_pointer_above_canvas_is_negative() {
        // Clamping happens when the target is applied
        assert_eq!(pointer_to_target(20.0, 100.0, 1.0), -80.0);
    }

    #[test]
    fn test_css_scaled_canvas() {
        let scale = surface_scale(500.0, 250.0);
        assert_eq!(scale, 2.0);
        assert_eq!(pointer_to_target(150.0, 50.0, scale), 200.0);
    }

    #[test]
    fn test_zero_css_height_falls_back_to_unscaled() {
        assert_eq!(surface_scale(500.0, 0.0), 1.0);
    }
}
