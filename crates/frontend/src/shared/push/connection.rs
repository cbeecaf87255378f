use std::cell::RefCell;
use std::rc::Rc;

use contracts::domain::a002_pallet_product::ProductData;
use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, Event, MessageEvent, WebSocket};

use super::protocol::{self, HubMessage};

/// Delays before each reconnect attempt; the connection gives up after the last.
const RECONNECT_DELAYS_MS: [u32; 4] = [0, 2_000, 10_000, 30_000];
const KEEP_ALIVE_MS: u32 = 15_000;

type ProductCallback = Rc<dyn Fn(ProductData)>;

struct Connection {
    url: String,
    method: String,
    on_product: ProductCallback,
    socket: Option<WebSocket>,
    attempt: usize,
    stopped: bool,
    keep_alive: Option<Interval>,
    // Handlers must outlive the socket callbacks that reference them.
    on_open: Option<Closure<dyn FnMut(Event)>>,
    on_message: Option<Closure<dyn FnMut(MessageEvent)>>,
    on_close: Option<Closure<dyn FnMut(CloseEvent)>>,
}

/// Handle to the reader's push hub. Dropping it does not close the socket;
/// call [`PushHandle::close`].
pub struct PushHandle {
    inner: Rc<RefCell<Connection>>,
}

impl Connection {
    /// Marks the connection stopped and drops the stored handlers, which
    /// break the `Rc` cycle back to this connection.
    fn shutdown(&mut self) -> Option<WebSocket> {
        self.stopped = true;
        self.keep_alive = None;
        let socket = self.socket.take();
        if let Some(socket) = socket.as_ref() {
            socket.set_onopen(None);
            socket.set_onmessage(None);
            socket.set_onclose(None);
        }
        self.on_open = None;
        self.on_message = None;
        self.on_close = None;
        socket
    }
}

impl PushHandle {
    pub fn close(self) {
        let mut conn = self.inner.borrow_mut();
        if let Some(socket) = conn.shutdown() {
            let _ = socket.close();
        }
        log::info!("push: closed {}", conn.url);
    }
}

/// Opens the hub connection and calls `on_product` for every pallet the hub
/// pushes through `method`.
pub fn connect(
    url: impl Into<String>,
    method: impl Into<String>,
    on_product: impl Fn(ProductData) + 'static,
) -> PushHandle {
    let inner = Rc::new(RefCell::new(Connection {
        url: url.into(),
        method: method.into(),
        on_product: Rc::new(on_product),
        socket: None,
        attempt: 0,
        stopped: false,
        keep_alive: None,
        on_open: None,
        on_message: None,
        on_close: None,
    }));
    open(&inner);
    PushHandle { inner }
}

fn open(inner: &Rc<RefCell<Connection>>) {
    let url = inner.borrow().url.clone();
    let socket = match WebSocket::new(&url) {
        Ok(socket) => socket,
        Err(e) => {
            log::error!("push: cannot open {}: {:?}", url, e);
            schedule_reconnect(inner);
            return;
        }
    };

    let on_open = {
        let inner = Rc::clone(inner);
        Closure::wrap(Box::new(move |_: Event| {
            let mut conn = inner.borrow_mut();
            if let Some(socket) = conn.socket.as_ref() {
                let _ = socket.send_with_str(&protocol::handshake_request());
                let ping_socket = socket.clone();
                conn.keep_alive = Some(Interval::new(KEEP_ALIVE_MS, move || {
                    let _ = ping_socket.send_with_str(&protocol::ping_message());
                }));
            }
            log::info!("push: connected to {}", conn.url);
        }) as Box<dyn FnMut(Event)>)
    };

    let on_message = {
        let inner = Rc::clone(inner);
        Closure::wrap(Box::new(move |event: MessageEvent| {
            let Some(text) = event.data().as_string() else {
                return;
            };
            handle_text(&inner, &text);
        }) as Box<dyn FnMut(MessageEvent)>)
    };

    let on_close = {
        let inner = Rc::clone(inner);
        Closure::wrap(Box::new(move |event: CloseEvent| {
            {
                let mut conn = inner.borrow_mut();
                conn.keep_alive = None;
                conn.socket = None;
                if conn.stopped {
                    return;
                }
                log::warn!(
                    "push: connection to {} dropped (code {})",
                    conn.url,
                    event.code()
                );
            }
            schedule_reconnect(&inner);
        }) as Box<dyn FnMut(CloseEvent)>)
    };

    socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
    socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
    socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));

    let mut conn = inner.borrow_mut();
    conn.socket = Some(socket);
    conn.on_open = Some(on_open);
    conn.on_message = Some(on_message);
    conn.on_close = Some(on_close);
}

fn handle_text(inner: &Rc<RefCell<Connection>>, text: &str) {
    let (method, on_product) = {
        let conn = inner.borrow();
        (conn.method.clone(), Rc::clone(&conn.on_product))
    };

    for frame in protocol::parse_frames(text) {
        match frame {
            Ok(HubMessage::Handshake { error: None }) => {
                inner.borrow_mut().attempt = 0;
            }
            Ok(HubMessage::Handshake { error: Some(e) }) => {
                log::error!("push: handshake rejected: {}", e);
            }
            Ok(HubMessage::Close { error }) => {
                log::warn!("push: server closed the hub: {}", error.unwrap_or_default());
            }
            Ok(message @ HubMessage::Invocation { .. }) => {
                for product in protocol::extract_products(&message, &method) {
                    on_product(product);
                }
            }
            Ok(HubMessage::Ping) | Ok(HubMessage::Other(_)) => {}
            Err(e) => log::warn!("push: {}", e),
        }
    }
}

fn schedule_reconnect(inner: &Rc<RefCell<Connection>>) {
    let mut conn = inner.borrow_mut();
    if conn.stopped {
        return;
    }
    let Some(&delay) = RECONNECT_DELAYS_MS.get(conn.attempt) else {
        log::warn!(
            "push: giving up on {} after {} attempts",
            conn.url,
            conn.attempt
        );
        return;
    };
    conn.attempt += 1;
    log::info!("push: reconnecting in {} ms", delay);

    // Forgotten rather than stored: a failed `open` reschedules from inside
    // this very callback. A pending retry after `close` sees `stopped`.
    let retry = Rc::clone(inner);
    Timeout::new(delay, move || {
        if !retry.borrow().stopped {
            open(&retry);
        }
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle_connection(on_product: ProductCallback) -> Connection {
        Connection {
            url: "ws://localhost/hub".into(),
            method: "ReceiveProduct".into(),
            on_product,
            socket: None,
            attempt: 2,
            stopped: false,
            keep_alive: None,
            on_open: None,
            on_message: None,
            on_close: None,
        }
    }

    #[test]
    fn test_shutdown_stops_and_clears_handlers() {
        let mut conn = idle_connection(Rc::new(|_| {}));
        assert!(conn.shutdown().is_none());
        assert!(conn.stopped);
        assert!(conn.keep_alive.is_none());
        assert!(conn.on_open.is_none());
        assert!(conn.on_message.is_none());
        assert!(conn.on_close.is_none());
    }

    #[test]
    fn test_closed_handle_is_the_last_owner() {
        let inner = Rc::new(RefCell::new(idle_connection(Rc::new(|_| {}))));
        let watch = Rc::downgrade(&inner);
        PushHandle { inner }.close();
        assert!(watch.upgrade().is_none());
    }
}
