use glimmer_panel_leptos::App;

fn main() {
    leptos::mount::mount_to_body(App);
}
