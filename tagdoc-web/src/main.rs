use tagdoc_web::App;

fn main() {
    dioxus::launch(App);
}
