use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, MouseEvent, NodeRef, Properties};

const HIDDEN: &str = "top-sheet";
const SHOWN: &str = "top-sheet show";

/// Sheet that slides down over the current screen to host a dialog.
///
/// It is always mounted; [`open_top_sheet`] and [`close_top_sheet`] toggle
/// its visibility through the `show` class so the CSS transition can run.
pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: String,
    /// Called when the close button is pressed, after the sheet was hidden.
    #[prop_or_default]
    pub on_close: Callback<()>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = {
            let node_ref = props.node_ref.clone();
            let on_close = props.on_close.clone();
            Callback::from(move |_: MouseEvent| {
                close_top_sheet(node_ref.clone());
                on_close.emit(());
            })
        };
        html! {
            <div class={HIDDEN} id={self.id.clone()} ref={props.node_ref.clone()}>
                <div class="top-sheet-header">
                    <h2>{ props.title.clone() }</h2>
                    <button class="top-sheet-close" onclick={on_close}>{ "✕" }</button>
                </div>
                <div class="top-sheet-body">
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    set_sheet_class(top_sheet_ref, SHOWN);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    set_sheet_class(top_sheet_ref, HIDDEN);
}

/// Applies `class` on the next tick so a freshly rendered sheet animates.
fn set_sheet_class(top_sheet_ref: NodeRef, class: &'static str) {
    if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
        gloo_timers::callback::Timeout::new(50, move || {
            top_sheet.set_class_name(class);
        })
        .forget();
    }
}
