use std::time::Duration;

use desktop_app_projects::{CardTarget, ProjectCard};
use leptos::*;
use portfolio_content::Project;
use system_ui::{Icon, IconName, Text, TextTone};

const HINT_VISIBLE_FOR: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Committed horizontal scroll of the carousel track.
struct CarouselScroll {
    position: f64,
    max: f64,
}

impl CarouselScroll {
    /// `scrollLeft` for a drag that started at `drag_start_x` and is now at `client_x`.
    fn dragged_to(self, drag_start_x: f64, client_x: f64) -> f64 {
        (self.position + drag_start_x - client_x).clamp(0.0, self.max.max(0.0))
    }

    /// Scroll progress in percent; zero when the track does not overflow.
    fn progress_percent(self) -> f64 {
        if self.max > 0.0 {
            (self.position / self.max * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

#[component]
/// Horizontally scrolling project strip with click-and-drag panning.
pub(super) fn ProjectCarousel(projects: &'static [Project]) -> impl IntoView {
    let track = create_node_ref::<html::Div>();
    let scroll = create_rw_signal(CarouselScroll::default());
    let drag_start = create_rw_signal(None::<f64>);
    let show_hint = create_rw_signal(true);

    let measure = move || {
        if let Some(track) = track.get_untracked() {
            let max = f64::from(track.scroll_width() - track.client_width());
            scroll.update(|scroll| scroll.max = max.max(0.0));
        }
    };
    track.on_load(move |_| measure());
    let resize = window_event_listener(ev::resize, move |_| measure());
    on_cleanup(move || resize.remove());

    if let Ok(timer) = set_timeout_with_handle(
        move || {
            show_hint.try_set(false);
        },
        HINT_VISIBLE_FOR,
    ) {
        on_cleanup(move || timer.clear());
    }

    let record_position = move || {
        if let Some(track) = track.get_untracked() {
            let position = f64::from(track.scroll_left());
            scroll.update(|scroll| scroll.position = position);
        }
    };
    let end_drag = move |_: web_sys::MouseEvent| {
        if drag_start.get_untracked().is_some() {
            drag_start.set(None);
            record_position();
        }
    };

    view! {
        <div class="project-carousel">
            <Show when=move || show_hint.get()>
                <div class="project-carousel-hint">
                    <Icon icon=IconName::Grid />
                    <Text tone=TextTone::Secondary>"Click and drag to explore projects"</Text>
                </div>
            </Show>
            <div
                class="project-carousel-track"
                node_ref=track
                data-dragging=move || drag_start.get().is_some().to_string()
                on:mousedown=move |ev: web_sys::MouseEvent| {
                    measure();
                    drag_start.set(Some(f64::from(ev.client_x())));
                    show_hint.set(false);
                }
                on:mousemove=move |ev: web_sys::MouseEvent| {
                    let (Some(start), Some(track)) = (drag_start.get_untracked(), track.get_untracked()) else {
                        return;
                    };
                    let target = scroll.get_untracked().dragged_to(start, f64::from(ev.client_x()));
                    track.set_scroll_left(target.round() as i32);
                }
                on:mouseup=end_drag
                on:mouseleave=end_drag
                on:scroll=move |_| {
                    if drag_start.get_untracked().is_none() {
                        record_position();
                    }
                }
            >
                {projects
                    .iter()
                    .map(|project| view! {
                        <div class="project-carousel-item">
                            <ProjectCard project target=CardTarget::Route />
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="project-carousel-progress" aria-hidden="true">
                <span
                    class="project-carousel-progress-fill"
                    style=move || format!("width:{:.1}%;", scroll.get().progress_percent())
                ></span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drag_pans_opposite_to_pointer_and_clamps() {
        let scroll = CarouselScroll {
            position: 200.0,
            max: 900.0,
        };
        assert_eq!(scroll.dragged_to(500.0, 400.0), 300.0);
        assert_eq!(scroll.dragged_to(500.0, 650.0), 50.0);
        assert_eq!(scroll.dragged_to(500.0, 900.0), 0.0);
        assert_eq!(scroll.dragged_to(100.0, -1200.0), 900.0);
    }

    #[test]
    fn progress_is_zero_without_overflow() {
        assert_eq!(CarouselScroll::default().progress_percent(), 0.0);
        assert_eq!(
            CarouselScroll {
                position: 225.0,
                max: 900.0
            }
            .progress_percent(),
            25.0
        );
    }

    #[test]
    fn track_without_overflow_never_moves() {
        let scroll = CarouselScroll {
            position: 0.0,
            max: -40.0,
        };
        assert_eq!(scroll.dragged_to(300.0, 0.0), 0.0);
    }
}
