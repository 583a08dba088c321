use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::core::Task;
use dioxus::document::Document;
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::reveal::{drive, BrowserFrames, RevealAnimation, Visibility, DEFAULT_THRESHOLD};

static NEXT_COUNTER_ID: AtomicU64 = AtomicU64::new(1);

/// Number that counts up from 0 the first time it scrolls into view.
#[component]
pub fn AnimatedCounter(
    value: u64,
    #[props(into, default)] suffix: String,
    #[props(default = 2000)] duration_ms: u32,
    #[props(default = DEFAULT_THRESHOLD)] threshold: f64,
    color: Option<String>,
) -> Element {
    let element_id =
        use_hook(|| format!("reveal-{}", NEXT_COUNTER_ID.fetch_add(1, Ordering::Relaxed)));
    let mut displayed = use_signal(|| 0_u64);
    let task = use_hook(|| Rc::new(Cell::new(None::<Task>)));

    let doc = use_hook(document::document);

    let drop_task = task.clone();
    let drop_id = element_id.clone();
    use_drop(move || {
        if let Some(task) = drop_task.take() {
            task.cancel();
            debug!(id = %drop_id, "releasing visibility observer");
            drop(doc.eval(release_script(&drop_id)));
        }
    });

    let mount_id = element_id.clone();
    let on_mounted = move |_| {
        if task.get().is_some() {
            return;
        }
        let id = mount_id.clone();
        let handle = spawn(async move {
            let mut animation = RevealAnimation::new(value)
                .with_duration_ms(f64::from(duration_ms))
                .with_threshold(threshold);
            animation.observe();

            let mut observer = document::eval(&observer_script(&id, animation.threshold()));
            while !animation.is_animating() {
                match observer.recv::<Visibility>().await {
                    Ok(visibility) => {
                        if animation.on_visibility(visibility) {
                            debug!(id = %id, target = value, "reveal started");
                        }
                    }
                    Err(err) => {
                        warn!("visibility observer for {id} failed: {err:?}");
                        animation.settle();
                        displayed.set(animation.displayed());
                        return;
                    }
                }
            }

            drive(&mut animation, &BrowserFrames::new(), |current| {
                displayed.set(current)
            })
            .await;
        });
        task.set(Some(handle));
    };

    let style = color
        .as_deref()
        .map(|color| format!("color: {color};"))
        .unwrap_or_default();

    rsx! {
        span {
            id: "{element_id}",
            class: "reveal_counter",
            style: "{style}",
            onmounted: on_mounted,
            "{displayed}{suffix}"
        }
    }
}

/// Registry of live observers on `window`, keyed by element id.
const OBSERVERS: &str = "window.__revealObservers";

/// Observer that reports crossings until the threshold is reached, then
/// disconnects. It registers itself under the element id so that
/// [`release_script`] can tear it down when the counter unmounts first.
fn observer_script(id: &str, threshold: f64) -> String {
    format!(
        r#"
        {OBSERVERS} = {OBSERVERS} || {{}};
        await new Promise((resolve) => {{
          const el = document.getElementById("{id}");
          if (!el || typeof IntersectionObserver === "undefined") {{
            dioxus.send({{ intersecting: true, ratio: 1.0 }});
            resolve();
            return;
          }}
          const finish = () => {{
            observer.disconnect();
            delete {OBSERVERS}["{id}"];
            resolve();
          }};
          const observer = new IntersectionObserver((entries) => {{
            if (!el.isConnected) {{
              finish();
              return;
            }}
            for (const entry of entries) {{
              dioxus.send({{ intersecting: entry.isIntersecting, ratio: entry.intersectionRatio }});
              if (entry.isIntersecting && entry.intersectionRatio >= {threshold}) {{
                finish();
                return;
              }}
            }}
          }}, {{ threshold: [0, {threshold}, 1] }});
          {OBSERVERS}["{id}"] = finish;
          observer.observe(el);
        }});
        return "";
        "#
    )
}

/// Disconnects the observer registered for `id`, if it is still live.
fn release_script(id: &str) -> String {
    format!(
        r#"
        const finish = ({OBSERVERS} || {{}})["{id}"];
        if (finish) {{ finish(); }}
        return "";
        "#
    )
}

#[cfg(test)]
mod tests {
    use dioxus::core::NoOpMutations;

    use super::*;

    #[test]
    fn observer_script_targets_element_and_threshold() {
        let script = observer_script("reveal-7", 0.25);
        assert!(script.contains(r#"getElementById("reveal-7")"#));
        assert!(script.contains("threshold: [0, 0.25, 1]"));
        assert!(script.contains("observer.disconnect()"));
        assert!(script.contains(r#"window.__revealObservers["reveal-7"] = finish"#));
    }

    #[test]
    fn release_script_finishes_the_registered_observer() {
        let script = release_script("reveal-7");
        assert!(script.contains(r#"(window.__revealObservers || {})["reveal-7"]"#));
        assert!(script.contains("finish()"));
    }

    thread_local! {
        static TOGGLE: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
        static RENDERED: Cell<bool> = const { Cell::new(false) };
    }

    #[allow(non_snake_case)]
    fn Toggled() -> Element {
        let mounted = use_signal(|| true);
        TOGGLE.with(|slot| slot.set(Some(mounted)));
        RENDERED.with(|slot| slot.set(mounted()));
        rsx! {
            if mounted() {
                AnimatedCounter { value: 300, suffix: "%", color: "var(--accent)" }
            }
        }
    }

    #[test]
    fn counter_unmounts_before_it_was_ever_observed() {
        let mut dom = VirtualDom::new(Toggled);
        dom.rebuild_in_place();
        assert!(RENDERED.with(Cell::get));

        let mut mounted = TOGGLE.with(Cell::get).unwrap();
        dom.in_runtime(|| mounted.set(false));
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);

        assert!(!RENDERED.with(Cell::get));
    }
}
