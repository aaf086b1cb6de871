use crate::pages::login::Login;
use crate::pages::register::RegisterForm;
use patternfly_yew::prelude::*;
use yew::prelude::*;
use yew_nested_router::prelude::{Switch as RouterSwitch, *};

#[derive(Debug, Default, Clone, PartialEq, Eq, Target)]
pub enum AppRoute {
    #[default]
    Register,
    Login,
}

#[function_component(Application)]
pub fn app() -> Html {
    html! {
        <Router<AppRoute> default={AppRoute::Register}>
            <RouterSwitch<AppRoute> render={|target| switch_app_route(target)} />
        </Router<AppRoute>>
    }
}

fn switch_app_route(target: AppRoute) -> Html {
    match target {
        AppRoute::Register => html! {<AppPage><RegisterForm/></AppPage>},
        AppRoute::Login => html! {<AppPage><Login/></AppPage>},
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct PageProps {
    pub children: Children,
}

#[function_component(AppPage)]
fn page(props: &PageProps) -> Html {
    html! {
        <Page>
            { for props.children.iter() }
        </Page>
    }
}
