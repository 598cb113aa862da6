use activity_board_yew::App;

fn main() {
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    tracing::info!("Starting Activity Board");

    yew::Renderer::<App>::new().render();
}
