use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod models;
mod services;

use components::Simulator;
use components::Status;
use hooks::use_regions::use_regions;

#[function_component(App)]
fn app() -> Html {
    let regions = use_regions();

    html! {
        <div class="app">
            <header class="header">
                <h1>{"Clarke Energia"}</h1>
                <p>{"Simule sua economia com energia renovável"}</p>
            </header>

            <main class="main">
                <Status state={(*regions).clone()} />

                if let Some(list) = regions.data() {
                    <Simulator regions={list.clone()} />
                }
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
