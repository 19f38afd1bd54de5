use leptos::prelude::*;

/// Stroke-icon markup (24x24 viewBox) by name.
fn icon_paths(name: &str) -> (&'static str, u32) {
    match name {
        "bar-chart" => (
            r#"<path d="M3 3v18h18"/><rect x="7" y="12" width="3" height="6"/><rect x="12" y="8" width="3" height="10"/><rect x="17" y="5" width="3" height="13"/>"#,
            20,
        ),
        "map-pin" => (
            r#"<path d="M21 10c0 7-9 13-9 13S3 17 3 10a9 9 0 0 1 18 0z"/><circle cx="12" cy="10" r="3"/>"#,
            20,
        ),
        "route" => (
            r#"<circle cx="6" cy="19" r="3"/><path d="M9 19h8.5a3.5 3.5 0 0 0 0-7h-11a3.5 3.5 0 0 1 0-7H15"/><circle cx="18" cy="5" r="3"/>"#,
            20,
        ),
        "users" => (
            r#"<path d="M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M23 21v-2a4 4 0 0 0-3-3.87"/><path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
            20,
        ),
        "user" => (
            r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#,
            20,
        ),
        "settings" => (
            r#"<circle cx="12" cy="12" r="3"/><path d="M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09a1.65 1.65 0 0 0-1-1.51 1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09a1.65 1.65 0 0 0 1.51-1 1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"/>"#,
            20,
        ),
        "folder" => (
            r#"<path d="M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z"/>"#,
            20,
        ),
        "dollar" => (
            r#"<path d="M12 1v22"/><path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"/>"#,
            20,
        ),
        "receipt" => (
            r#"<path d="M14 2H6a2 2 0 0 0-2 2v16l4-2 4 2 4-2 4 2V8z"/><path d="M14 2v6h6"/><path d="M8 13h8"/><path d="M8 17h5"/>"#,
            20,
        ),
        "calendar" => (
            r#"<rect x="3" y="4" width="18" height="18" rx="2" ry="2"/><path d="M16 2v4"/><path d="M8 2v4"/><path d="M3 10h18"/>"#,
            20,
        ),
        "clock" => (r#"<circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/>"#, 20),
        "plus" => (r#"<path d="M12 5v14"/><path d="M5 12h14"/>"#, 16),
        "edit" => (
            r#"<path d="M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"/><path d="M18.5 2.5a2.12 2.12 0 0 1 3 3L12 15l-4 1 1-4z"/>"#,
            16,
        ),
        "trash" => (
            r#"<path d="M3 6h18"/><path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/><path d="M10 11v6"/><path d="M14 11v6"/><path d="M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2"/>"#,
            16,
        ),
        "refresh" => (
            r#"<path d="M23 4v6h-6"/><path d="M1 20v-6h6"/><path d="M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"/>"#,
            16,
        ),
        "save" => (
            r#"<path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/><path d="M17 21v-8H7v8"/><path d="M7 3v5h8"/>"#,
            16,
        ),
        "filter" => (r#"<path d="M22 3H2l8 9.46V19l4 2v-8.54z"/>"#, 16),
        "search" => (r#"<circle cx="11" cy="11" r="8"/><path d="M21 21l-4.35-4.35"/>"#, 16),
        "x" => (r#"<path d="M18 6 6 18"/><path d="M6 6l12 12"/>"#, 16),
        "log-out" => (
            r#"<path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/><path d="M16 17l5-5-5-5"/><path d="M21 12H9"/>"#,
            18,
        ),
        "menu" => (r#"<path d="M3 12h18"/><path d="M3 6h18"/><path d="M3 18h18"/>"#, 18),
        "chevron-left" => (r#"<polyline points="15 18 9 12 15 6"/>"#, 16),
        "chevron-right" => (r#"<polyline points="9 18 15 12 9 6"/>"#, 16),
        "chevron-down" => (r#"<polyline points="6 9 12 15 18 9"/>"#, 16),
        "chevrons-left" => (r#"<polyline points="11 17 6 12 11 7"/><polyline points="18 17 13 12 18 7"/>"#, 16),
        "chevrons-right" => (r#"<polyline points="13 17 18 12 13 7"/><polyline points="6 17 11 12 6 7"/>"#, 16),
        "alert" => (
            r#"<path d="M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#,
            16,
        ),
        _ => (r#"<circle cx="12" cy="12" r="10"/><path d="M12 8v4l3 3"/>"#, 20),
    }
}

pub fn icon(name: &str) -> AnyView {
    let (paths, size) = icon_paths(name);
    view! {
        <svg
            width=size
            height=size
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=paths
        ></svg>
    }
    .into_any()
}
