use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::{
    camera_controls::CameraControls, canvas_view::CanvasView, catalog_panel::CatalogPanel,
    detail_modal::DetailModal, theme_toggle::ThemeToggle,
};
use crate::config::AppConfig;
use crate::filter::CatalogFilter;
use crate::model::{CATALOG, ComponentKind};
use crate::registry::Registry;
use crate::source::{SourceBackend, SourceCache, SourceState};
use crate::state::modal::LOADING_DELAY_MS;
use crate::state::theme::LocalStoragePrefs;
use crate::state::{Camera, DetailTab, ModalState, Theme, ThemeStore, masonry};

/// Current theme plus a way to flip it, provided to every view.
#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// Shared camera and the hook the canvas registers to push the transform to the DOM.
#[derive(Clone)]
pub struct ViewportContext {
    pub camera: Rc<RefCell<Camera>>,
    pub draw_ref: Rc<RefCell<Option<Rc<dyn Fn()>>>>,
}

impl PartialEq for ViewportContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.camera, &other.camera) && Rc::ptr_eq(&self.draw_ref, &other.draw_ref)
    }
}

impl ViewportContext {
    pub fn redraw(&self) {
        if let Some(f) = &*self.draw_ref.borrow() {
            f();
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::load());
    let backend = use_memo((), {
        let config = config.clone();
        move |_| SourceBackend::from_base_url(config.registry_base_url.as_deref())
    });

    // Theme: persisted preference, observed through the store
    let theme_store = use_mut_ref(|| ThemeStore::load(Rc::new(LocalStoragePrefs)));
    let theme = use_state(|| theme_store.borrow().theme());
    {
        let theme_store = theme_store.clone();
        let theme = theme.clone();
        use_effect_with((), move |_| {
            let id = theme_store.borrow_mut().subscribe(move |t| theme.set(t));
            move || theme_store.borrow_mut().unsubscribe(id)
        });
    }
    let theme_ctx = ThemeContext {
        theme: *theme,
        toggle: {
            let theme_store = theme_store.clone();
            Callback::from(move |_| theme_store.borrow_mut().toggle())
        },
    };

    let camera = use_mut_ref(|| Camera::new(config.camera.clone()));
    let draw_ref = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let viewport_ctx = ViewportContext {
        camera: camera.clone(),
        draw_ref: draw_ref.clone(),
    };

    let filter = use_state(CatalogFilter::default);
    let layout = use_memo((*filter).clone(), {
        let config = config.clone();
        move |f| masonry(&Registry.list_components(Some(f)), &config.masonry())
    });
    // Auto-centering always fits the full catalog.
    let full_layout = use_memo((), {
        let config = config.clone();
        move |_| masonry(&CATALOG.iter().collect::<Vec<_>>(), &config.masonry())
    });

    let modal = use_mut_ref(ModalState::default);
    let source = use_state(|| None::<SourceState>);
    let cache = use_mut_ref(SourceCache::default);
    let reveal_timer = use_mut_ref(|| None::<Timeout>);
    let restore_timer = use_mut_ref(|| None::<Timeout>);
    let rerender = use_force_update();

    let on_select: Callback<ComponentKind> = {
        let modal = modal.clone();
        let source = source.clone();
        let cache = cache.clone();
        let backend = backend.clone();
        let viewport_ctx = viewport_ctx.clone();
        let reveal_timer = reveal_timer.clone();
        let restore_timer = restore_timer.clone();
        let rerender = rerender.clone();
        Callback::from(move |kind: ComponentKind| {
            if modal.borrow().is_open() {
                return;
            }
            restore_timer.borrow_mut().take();
            let restored = modal.borrow().restore_pending();
            let generation = modal
                .borrow_mut()
                .open(kind, &mut viewport_ctx.camera.borrow_mut());
            if restored {
                viewport_ctx.redraw();
            }

            let cached = cache.borrow().lookup(kind);
            match cached {
                Some(hit) => source.set(Some(hit)),
                None => {
                    source.set(Some(SourceState::Loading));
                    let backend = backend.clone();
                    let cache = cache.clone();
                    let modal = modal.clone();
                    let source = source.clone();
                    spawn_local(async move {
                        let result = backend.fetch(kind.id()).await;
                        let state = cache.borrow_mut().record(kind, result);
                        if modal.borrow().is_current(generation) {
                            source.set(Some(state));
                        }
                    });
                }
            }

            let modal_t = modal.clone();
            let rerender_t = rerender.clone();
            *reveal_timer.borrow_mut() = Some(Timeout::new(LOADING_DELAY_MS, move || {
                modal_t.borrow_mut().reveal(generation);
                rerender_t.force_update();
            }));
            rerender.force_update();
        })
    };

    let on_close: Callback<()> = {
        let modal = modal.clone();
        let source = source.clone();
        let viewport_ctx = viewport_ctx.clone();
        let reveal_timer = reveal_timer.clone();
        let restore_timer = restore_timer.clone();
        let rerender = rerender.clone();
        let settle_ms = config.camera.settle_delay_ms;
        Callback::from(move |_| {
            if modal.borrow_mut().close().is_none() {
                return;
            }
            reveal_timer.borrow_mut().take();
            source.set(None);
            let ctx = viewport_ctx.clone();
            let modal_t = modal.clone();
            *restore_timer.borrow_mut() = Some(Timeout::new(settle_ms, move || {
                if modal_t.borrow_mut().settle(&mut ctx.camera.borrow_mut()) {
                    ctx.redraw();
                }
            }));
            rerender.force_update();
        })
    };

    let on_tab: Callback<DetailTab> = {
        let modal = modal.clone();
        let rerender = rerender.clone();
        Callback::from(move |tab| {
            modal.borrow_mut().tab = tab;
            rerender.force_update();
        })
    };

    let on_filter: Callback<CatalogFilter> = {
        let filter = filter.clone();
        Callback::from(move |f: CatalogFilter| filter.set(f))
    };

    let palette = theme.palette();
    let m = modal.borrow().clone();
    let detail = match &m.selected {
        Some(selected) => html! {
            <DetailModal
                selected={selected.clone()}
                phase={m.phase}
                tab={m.tab}
                source={(*source).clone()}
                site_url={AttrValue::from(config.site_url.clone())}
                on_close={on_close.clone()}
                on_tab={on_tab}
            />
        },
        None => html! {},
    };

    html! {
        <ContextProvider<ThemeContext> context={theme_ctx}>
        <ContextProvider<ViewportContext> context={viewport_ctx}>
            <div id="root" style={format!("position:relative; width:100vw; height:100vh; overflow:hidden; background:{}; color:{}; font-family:system-ui, sans-serif;", palette.background, palette.text)}>
                <CanvasView
                    layout={layout}
                    initial_bounds={full_layout.content_bounds}
                    locked={m.is_open()}
                    on_select={on_select.clone()}
                />
                <CatalogPanel filter={(*filter).clone()} on_filter={on_filter} on_select={on_select} />
                <div style="position:absolute; top:12px; right:12px; display:flex; gap:8px;">
                    <ThemeToggle />
                </div>
                <CameraControls content={full_layout.content_bounds} />
                { detail }
            </div>
        </ContextProvider<ViewportContext>>
        </ContextProvider<ThemeContext>>
    }
}
