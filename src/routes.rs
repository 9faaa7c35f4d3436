use dioxus::prelude::*;

use crate::components::AppLayout;
use crate::pages::{
    AddChart, AddChartAsync, AdminSubPage, ChartDetail, MyChart, NotFound, UserLogin,
    UserRegister, Welcome,
};
use crate::shared::types::Chart;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/user/login")]
    UserLogin {},
    #[route("/user/register")]
    UserRegister {},
    #[layout(AppLayout)]
        #[redirect("/", || Route::Welcome {})]
        #[route("/welcome")]
        Welcome {},
        #[route("/add_chart")]
        AddChart {},
        #[route("/chart_detail/:id")]
        ChartDetail { id: i64 },
        #[route("/add_chart_async")]
        AddChartAsync {},
        #[route("/my_chart")]
        MyChart {},
        #[nest("/admin")]
            #[redirect("/", || Route::AdminSubPage {})]
            #[route("/sub-page")]
            AdminSubPage {},
        #[end_nest]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// One entry of the static route table that drives the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub component: Option<&'static str>,
    pub routes: &'static [RouteEntry],
    /// Access tag carried for display; not enforced client-side.
    pub access: Option<&'static str>,
    pub redirect: Option<&'static str>,
    pub layout: bool,
    pub hide_in_menu: bool,
}

const ENTRY: RouteEntry = RouteEntry {
    path: "",
    name: None,
    icon: None,
    component: None,
    routes: &[],
    access: None,
    redirect: None,
    layout: true,
    hide_in_menu: false,
};

pub static ROUTES: &[RouteEntry] = &[
    RouteEntry {
        path: "/welcome",
        name: Some("Welcome"),
        icon: Some("smile"),
        component: Some("Welcome"),
        ..ENTRY
    },
    RouteEntry {
        path: "/user",
        layout: false,
        routes: &[
            RouteEntry {
                path: "/user/login",
                component: Some("UserLogin"),
                ..ENTRY
            },
            RouteEntry {
                path: "/user/register",
                component: Some("UserRegister"),
                ..ENTRY
            },
        ],
        ..ENTRY
    },
    RouteEntry {
        path: "/",
        redirect: Some("/welcome"),
        ..ENTRY
    },
    RouteEntry {
        path: "/add_chart",
        name: Some("Smart analysis"),
        icon: Some("barChart"),
        component: Some("AddChart"),
        ..ENTRY
    },
    RouteEntry {
        path: "/chart_detail/:id",
        name: Some("Analysis details"),
        icon: Some("lineChart"),
        component: Some("ChartDetail"),
        hide_in_menu: true,
        ..ENTRY
    },
    RouteEntry {
        path: "/add_chart_async",
        name: Some("Smart analysis (async)"),
        icon: Some("barChart"),
        component: Some("AddChartAsync"),
        ..ENTRY
    },
    RouteEntry {
        path: "/my_chart",
        name: Some("My charts"),
        icon: Some("pieChart"),
        component: Some("MyChart"),
        ..ENTRY
    },
    RouteEntry {
        path: "/admin",
        icon: Some("crown"),
        access: Some("canAdmin"),
        routes: &[
            RouteEntry {
                path: "/admin",
                name: Some("Admin"),
                redirect: Some("/admin/sub-page"),
                ..ENTRY
            },
            RouteEntry {
                path: "/admin/sub-page",
                name: Some("Admin sub-page"),
                component: Some("AdminSubPage"),
                ..ENTRY
            },
        ],
        ..ENTRY
    },
    RouteEntry {
        path: "*",
        layout: false,
        component: Some("NotFound"),
        ..ENTRY
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub path: &'static str,
    pub name: &'static str,
    pub icon: Option<&'static str>,
    pub access: Option<&'static str>,
    pub children: Vec<MenuItem>,
}

fn collect_menu(
    entries: &'static [RouteEntry],
    inherited_access: Option<&'static str>,
    out: &mut Vec<MenuItem>,
) {
    for e in entries {
        if !e.layout || e.hide_in_menu || e.redirect.is_some() {
            continue;
        }
        let access = e.access.or(inherited_access);
        match e.name {
            Some(name) => {
                let mut children = Vec::new();
                collect_menu(e.routes, access, &mut children);
                out.push(MenuItem {
                    path: e.path,
                    name,
                    icon: e.icon,
                    access,
                    children,
                });
            }
            // unnamed groups lift their children into the parent level
            None => collect_menu(e.routes, access, out),
        }
    }
}

pub fn menu_items() -> Vec<MenuItem> {
    let mut out = Vec::new();
    collect_menu(ROUTES, None, &mut out);
    out
}

pub fn icon_glyph(icon: Option<&str>) -> &'static str {
    match icon {
        Some("smile") => "☺",
        Some("barChart") => "▥",
        Some("lineChart") => "📈",
        Some("pieChart") => "◔",
        Some("crown") => "♛",
        _ => "•",
    }
}

/// Record handed to the detail page alongside the route change.
#[derive(Clone, Copy)]
pub struct NavState {
    pub chart: Signal<Option<Chart>>,
}

impl NavState {
    /// Stored record when it belongs to `id`.
    pub fn chart_for(&self, id: i64) -> Option<Chart> {
        self.chart
            .peek()
            .as_ref()
            .filter(|c| c.id == Some(id))
            .cloned()
    }
}

pub fn use_nav_state_provider() -> NavState {
    let chart = use_signal(|| None);
    use_context_provider(|| NavState { chart })
}

pub fn push_chart_detail(chart: Chart) {
    let Some(id) = chart.id else {
        return;
    };
    let mut state = consume_context::<NavState>();
    state.chart.set(Some(chart));
    navigator().push(Route::ChartDetail { id });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn menu_skips_hidden_redirects_and_bare_layouts() {
        let names: Vec<&str> = menu_items().iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec![
                "Welcome",
                "Smart analysis",
                "Smart analysis (async)",
                "My charts",
                "Admin sub-page"
            ]
        );
    }

    #[test]
    fn admin_children_inherit_access_tag() {
        let items = menu_items();
        let admin = items.iter().find(|m| m.path == "/admin/sub-page").unwrap();
        assert_eq!(admin.access, Some("canAdmin"));
        assert_eq!(admin.icon, None);
        assert!(items.iter().all(|m| m.path == "/admin/sub-page" || m.access.is_none()));
    }

    #[test]
    fn every_component_entry_resolves_to_a_route() {
        fn walk(entries: &'static [RouteEntry], out: &mut Vec<&'static str>) {
            for e in entries {
                if e.component.is_some() && e.path != "*" {
                    out.push(e.path);
                }
                walk(e.routes, out);
            }
        }
        let mut paths = Vec::new();
        walk(ROUTES, &mut paths);
        assert_eq!(paths.len(), 8);
        for p in paths {
            let concrete = p.replace(":id", "12");
            let route = Route::from_str(&concrete).ok();
            assert!(
                !matches!(route, None | Some(Route::NotFound { .. })),
                "{p} does not resolve"
            );
        }
    }

    #[test]
    fn detail_path_carries_numeric_id() {
        assert_eq!(
            Route::from_str("/chart_detail/42").ok(),
            Some(Route::ChartDetail { id: 42 })
        );
        assert_eq!(Route::ChartDetail { id: 42 }.to_string(), "/chart_detail/42");
        assert!(matches!(
            Route::from_str("/does/not/exist").ok(),
            Some(Route::NotFound { .. })
        ));
    }
}
