use log::info;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, TouchEvent};
use yew::html::Scope;
use yew::prelude::*;

use crate::config;
use crate::listener::{viewport_width, Listener};
use crate::timeline::carousel::{DragInput, TimelineCarousel};
use crate::timeline::stops::Regime;

const PANORAMA_SRC: &str = "/assets/history-timeline.jpg";

pub enum TimelineMsg {
    MouseDown(f64),
    MouseMove(f64),
    MouseUp,
    TouchStart(f64),
    TouchMove(f64),
    TouchEnd,
    Prev,
    Next,
    GoTo(usize),
    Resize(f64),
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    #[prop_or_default]
    pub class: Classes,
}

// Document level listeners that keep a mouse drag alive outside the viewport
struct MouseDrag {
    _mouse_move: Listener,
    _mouse_up: Listener,
}

impl MouseDrag {
    fn start(link: &Scope<InteractiveTimeline>) -> Option<Self> {
        let move_link = link.clone();
        let mouse_move = Listener::on_document("mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                move_link.send_message(TimelineMsg::MouseMove(event.client_x() as f64));
            }
        })?;
        let up_link = link.clone();
        let mouse_up = Listener::on_document("mouseup", move |_| {
            up_link.send_message(TimelineMsg::MouseUp);
        })?;
        set_body_grabbing(true);
        Some(Self {
            _mouse_move: mouse_move,
            _mouse_up: mouse_up,
        })
    }
}

impl Drop for MouseDrag {
    fn drop(&mut self) {
        set_body_grabbing(false);
    }
}

fn set_body_grabbing(grabbing: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let (cursor, user_select) = if grabbing { ("grabbing", "none") } else { ("", "") };
    let _ = style.set_property("cursor", cursor);
    let _ = style.set_property("user-select", user_select);
}

fn first_touch_x(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| touch.client_x() as f64)
}

/// Drag, swipe or click through the history-of-money panorama.
pub struct InteractiveTimeline {
    carousel: TimelineCarousel,
    mouse_drag: Option<MouseDrag>,
    _resize: Option<Listener>,
}

impl Component for InteractiveTimeline {
    type Message = TimelineMsg;
    type Properties = TimelineProps;

    fn create(ctx: &Context<Self>) -> Self {
        let width = viewport_width().unwrap_or(config::WIDE_VIEWPORT_MIN_WIDTH);
        let regime = Regime::from_viewport_width(width);

        let link = ctx.link().clone();
        let resize = Listener::on_window("resize", move |_| {
            if let Some(width) = viewport_width() {
                link.send_message(TimelineMsg::Resize(width));
            }
        });

        Self {
            carousel: TimelineCarousel::new(regime.config()),
            mouse_drag: None,
            _resize: resize,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            TimelineMsg::MouseDown(x) => {
                self.carousel.begin_drag(DragInput::Pointer, x);
                if self.carousel.is_dragging() && self.mouse_drag.is_none() {
                    self.mouse_drag = MouseDrag::start(ctx.link());
                }
                true
            }
            TimelineMsg::MouseMove(x) | TimelineMsg::TouchMove(x) => self.carousel.drag_to(x),
            TimelineMsg::MouseUp => {
                self.carousel.end_drag();
                self.mouse_drag = None;
                true
            }
            TimelineMsg::TouchStart(x) => {
                self.carousel.begin_drag(DragInput::Touch, x);
                true
            }
            TimelineMsg::TouchEnd => {
                self.carousel.end_drag();
                true
            }
            TimelineMsg::Prev => {
                self.carousel.prev();
                true
            }
            TimelineMsg::Next => {
                self.carousel.next();
                true
            }
            TimelineMsg::GoTo(index) => {
                self.carousel.go_to(index);
                true
            }
            TimelineMsg::Resize(width) => {
                let regime = Regime::from_viewport_width(width);
                if regime == self.carousel.config().regime {
                    return false;
                }
                info!("Timeline switching to {:?} layout", regime);
                self.carousel.set_regime(regime.config());
                self.mouse_drag = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let config = self.carousel.config();
        let current = self.carousel.current_index();
        let label = self.carousel.current_stop().map(|stop| stop.label).unwrap_or_default();

        let pan_style = format!(
            "transform: translateX(-{:.2}%); width: {}%;",
            self.carousel.pan_offset(),
            config.image_width_percent
        );

        let dots = self.carousel.stops().iter().enumerate().map(|(index, stop)| {
            html! {
                <button
                    key={index}
                    class={classes!("timeline-dot", (index == current).then(|| "active"))}
                    aria-label={stop.label}
                    onclick={link.callback(move |_: MouseEvent| TimelineMsg::GoTo(index))}
                />
            }
        });

        let ontouchstart = link.batch_callback(|e: TouchEvent| {
            e.prevent_default();
            first_touch_x(&e).map(TimelineMsg::TouchStart)
        });
        let ontouchmove = link.batch_callback(|e: TouchEvent| first_touch_x(&e).map(TimelineMsg::TouchMove));
        let ontouchend = link.callback(|_: TouchEvent| TimelineMsg::TouchEnd);
        let onprev = link.callback(|_: MouseEvent| TimelineMsg::Prev);
        let onnext = link.callback(|_: MouseEvent| TimelineMsg::Next);

        let panorama = html! {
            <div class="timeline-panorama" style={pan_style}>
                <img src={PANORAMA_SRC} alt="The history of money, from barter to cryptocurrency" draggable="false" />
            </div>
        };

        let controls = html! {
            <>
                <button class="timeline-arrow left" onclick={onprev} disabled={!self.carousel.can_go_prev()}>{"‹"}</button>
                <button class="timeline-arrow right" onclick={onnext} disabled={!self.carousel.can_go_next()}>{"›"}</button>
                <div class="timeline-label">
                    <span>{label}</span>
                    <div class="timeline-pulse"></div>
                </div>
            </>
        };

        let body = if config.accepts_pointer {
            let onmousedown = link.callback(|e: MouseEvent| {
                e.prevent_default();
                TimelineMsg::MouseDown(e.client_x() as f64)
            });
            html! {
                <div
                    class={classes!("timeline-viewport", "wide", self.carousel.is_dragging().then(|| "dragging"))}
                    {onmousedown}
                    {ontouchstart}
                    {ontouchmove}
                    {ontouchend}
                >
                    {panorama}
                    {controls}
                    <div class="timeline-dots top">{ for dots }</div>
                </div>
            }
        } else {
            html! {
                <div class="timeline-card">
                    <div class="timeline-viewport narrow" {ontouchstart} {ontouchmove} {ontouchend}>
                        {panorama}
                        {controls}
                    </div>
                    <div class="timeline-dots">{ for dots }</div>
                </div>
            }
        };

        html! {
            <div class={classes!("interactive-timeline", ctx.props().class.clone())}>
                <style>
                    {r#"
                        .timeline-viewport {
                            position: relative;
                            overflow: hidden;
                            cursor: grab;
                            user-select: none;
                            background: #000;
                        }
                        .timeline-viewport.dragging {
                            cursor: grabbing;
                        }
                        .timeline-viewport.wide {
                            height: 45vh;
                            min-height: 350px;
                            max-height: 450px;
                        }
                        .timeline-viewport.narrow {
                            height: 220px;
                            border-radius: 8px;
                        }
                        .timeline-panorama {
                            position: absolute;
                            top: 0;
                            bottom: 0;
                            left: 0;
                            transition: transform 0.5s ease-out;
                            will-change: transform;
                        }
                        .timeline-panorama img {
                            width: 100%;
                            height: 100%;
                            object-fit: cover;
                            object-position: left;
                            pointer-events: none;
                        }
                        .timeline-arrow {
                            position: absolute;
                            top: 50%;
                            transform: translateY(-50%);
                            background: rgba(0, 0, 0, 0.6);
                            border: 1px solid rgba(255, 255, 255, 0.2);
                            border-radius: 50%;
                            color: #fff;
                            width: 44px;
                            height: 44px;
                            font-size: 24px;
                            cursor: pointer;
                        }
                        .timeline-arrow:disabled {
                            opacity: 0.5;
                            cursor: not-allowed;
                        }
                        .timeline-arrow.left { left: 16px; }
                        .timeline-arrow.right { right: 16px; }
                        .timeline-label {
                            position: absolute;
                            bottom: 24px;
                            left: 50%;
                            transform: translateX(-50%);
                            display: flex;
                            align-items: center;
                            gap: 12px;
                            padding: 12px 24px;
                            border-radius: 999px;
                            background: rgba(0, 0, 0, 0.6);
                            color: #fff;
                            font-size: 0.875rem;
                            white-space: nowrap;
                        }
                        .timeline-pulse {
                            width: 8px;
                            height: 8px;
                            border-radius: 50%;
                            background: #60a5fa;
                        }
                        .timeline-dots {
                            display: flex;
                            justify-content: center;
                            gap: 8px;
                            margin-top: 16px;
                        }
                        .timeline-dots.top {
                            position: absolute;
                            top: 16px;
                            left: 50%;
                            transform: translateX(-50%);
                            margin-top: 0;
                        }
                        .timeline-dot {
                            width: 12px;
                            height: 12px;
                            border-radius: 50%;
                            border: none;
                            background: rgba(255, 255, 255, 0.3);
                            cursor: pointer;
                            transition: all 0.2s;
                        }
                        .timeline-dot.active {
                            background: #60a5fa;
                            transform: scale(1.25);
                        }
                        .timeline-card {
                            background: #fff;
                            border-radius: 8px;
                            padding: 24px;
                            margin: 24px;
                            border: 1px solid #e5e7eb;
                        }
                        .timeline-card .timeline-dot {
                            width: 8px;
                            height: 8px;
                            background: #d1d5db;
                        }
                        .timeline-card .timeline-dot.active {
                            background: #2563eb;
                        }
                    "#}
                </style>
                {body}
            </div>
        }
    }
}
