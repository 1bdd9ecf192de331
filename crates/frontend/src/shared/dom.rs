//! Тонкая обвязка над DOM для жестов грида.
//!
//! Правило жеста: подписка на document при старте, безусловная отписка
//! при завершении, в том числе аварийном. `DocListener` снимает
//! обработчик в Drop, так что утечка подписки исключается владением.

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Обработчик события мыши на document, живущий ровно столько, сколько
/// живёт значение.
pub struct DocListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::MouseEvent)>,
}

impl DocListener {
    pub fn mouse(
        event: &'static str,
        handler: impl FnMut(web_sys::MouseEvent) + 'static,
    ) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::MouseEvent)>);
        document
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, closure })
    }
}

impl Drop for DocListener {
    fn drop(&mut self) {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let _ = document
                .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
    }
}

/// Включает/выключает класс на body (курсор на время ресайза и т.п.).
pub fn toggle_body_class(class: &str, on: bool) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = if on {
            body.class_list().add_1(class)
        } else {
            body.class_list().remove_1(class)
        };
    }
}

/// Откладывает вызов на следующий тик цикла событий. Используется для
/// схлопывания уведомлений жеста в ровно одно на дискретный проход.
pub fn defer(f: impl FnOnce() + 'static) {
    spawn_local(async move {
        TimeoutFuture::new(0).await;
        f();
    });
}
