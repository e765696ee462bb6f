use common::{
    Site,
    config::SiteConfig,
    contact::FormValues,
    content::{NavEntry, Project},
    layout::{FixedClock, HeaderControls, compose},
    nav::{NavController, OverlayState},
    render::{Action, NavLink},
    tokens::Breakpoint,
};

fn mobile_width() -> f64 {
    375.0
}

fn four_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("Home", "#home"),
        NavEntry::new("About", "#about"),
        NavEntry::new("Projects", "#projects"),
        NavEntry::new("Contact", "#contact"),
    ]
}

fn project(title: &str, live_demo: Option<&str>) -> Project {
    Project {
        title: title.to_owned(),
        description: String::from("something worth describing"),
        stack: vec![String::from("Rust"), String::from("Dioxus")],
        repository: Some(format!("https://github.com/someone/{title}")),
        live_demo: live_demo.map(String::from),
    }
}

#[test]
fn mobile_menu_opens_and_closes_through_a_link() {
    let mut config = SiteConfig::bundled().unwrap();
    config.content.nav = four_entries();
    let site = Site::new(config).unwrap();

    let bp = site.tokens().breakpoints.classify(mobile_width());
    assert!(!site.tokens().breakpoints.is_desktop(bp));

    let mut nav = NavController::new();

    // initial render: menu icon, no overlay
    let page = compose(&site, &nav, bp, &FixedClock(2025));
    assert_eq!(page.header.controls, HeaderControls::MenuIcon);
    assert!(page.overlay.is_none());

    // the menu icon toggles the overlay open with every entry in order
    nav.toggle();
    let page = compose(&site, &nav, bp, &FixedClock(2025));
    let overlay = page.overlay.expect("overlay should be open");

    let labels: Vec<&str> = overlay.links.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["Home", "About", "Projects", "Contact"]);

    // picking any link goes through the same toggle and closes it again
    let picked: &NavLink = &overlay.links[2];
    assert_eq!(picked.href, "#projects");
    nav.toggle();

    assert_eq!(nav.state(), OverlayState::Closed);
    let page = compose(&site, &nav, bp, &FixedClock(2025));
    assert!(page.overlay.is_none());
    assert_eq!(page.header.controls, HeaderControls::MenuIcon);
}

#[test]
fn widening_the_window_hides_an_open_overlay() {
    let site = Site::bundled().unwrap();
    let bps = &site.tokens().breakpoints;

    let mut nav = NavController::new();
    nav.toggle();

    let narrow = compose(&site, &nav, bps.classify(500.0), &FixedClock(2025));
    assert!(narrow.overlay.is_some());

    let wide = compose(&site, &nav, bps.classify(1400.0), &FixedClock(2025));
    assert!(wide.overlay.is_none());
    assert!(matches!(wide.header.controls, HeaderControls::Inline(_)));

    // the flag itself is untouched; narrowing again brings the overlay back
    assert!(nav.is_open());
    let narrow_again = compose(&site, &nav, bps.classify(500.0), &FixedClock(2025));
    assert_eq!(narrow_again.overlay, narrow.overlay);
}

#[test]
fn gallery_shows_live_demo_only_where_configured() {
    let mut config = SiteConfig::bundled().unwrap();
    config.content.projects = vec![
        project("alpha", Some("https://alpha.example.com")),
        project("beta", None),
        project("gamma", Some("https://gamma.example.com")),
    ];
    let site = Site::new(config).unwrap();

    let page = compose(&site, &NavController::new(), Breakpoint::Lg, &FixedClock(2025));
    let cards = &page.main.projects.cards;

    assert_eq!(cards.len(), 3);

    let with_demo = cards
        .iter()
        .filter(|card| {
            card.actions
                .iter()
                .any(|action| matches!(action, Action::LiveDemo { .. }))
        })
        .count();
    assert_eq!(with_demo, 2);

    assert_eq!(cards[1].title, "beta");
    assert_eq!(cards[1].actions.len(), 1);
    assert!(page.main.projects.equal_height);
}

#[test]
fn contact_form_blocks_an_empty_message() {
    let site = Site::bundled().unwrap();
    let page = compose(&site, &NavController::new(), Breakpoint::Md, &FixedClock(2025));
    let form = &page.main.contact.form;

    let values = FormValues::new()
        .with("name", "Grace")
        .with("email", "grace@example.com");

    let blocked = form.submit(&values).unwrap_err();
    assert_eq!(blocked.missing, vec!["message"]);

    let post = form
        .submit(&values.with("message", "Let's talk"))
        .unwrap();
    assert_eq!(post.fields[0], (String::from("form-name"), String::from("contact")));
    assert_eq!(post.action, site.content().contact.endpoint);
}

#[test]
fn both_nav_call_sites_follow_a_changed_table() {
    let mut config = SiteConfig::bundled().unwrap();
    config.content.nav = vec![
        NavEntry::new("Work", "#projects"),
        NavEntry::new("Start", "#home"),
        NavEntry::new("Say hi", "#contact"),
        NavEntry::new("Me", "#about"),
    ];
    let site = Site::new(config).unwrap();

    let mut nav = NavController::new();
    nav.toggle();

    let mobile = compose(&site, &nav, Breakpoint::Xs, &FixedClock(2025));
    let desktop = compose(&site, &nav, Breakpoint::Xl, &FixedClock(2025));

    let HeaderControls::Inline(inline) = desktop.header.controls else {
        panic!("desktop header should show inline links");
    };
    let overlay = mobile.overlay.unwrap().links;

    assert_eq!(inline, overlay);
    assert_eq!(inline.len(), 4);
    assert_eq!(inline[0].label, "Work");
    assert_eq!(inline[3].href, "#about");
}
