use dioxus::prelude::*;

use ui::NoticeBoard;

const BOARD_CSS: Asset = asset!("/assets/board.css");

#[component]
pub fn Board() -> Element {
    rsx! {
        document::Stylesheet { href: BOARD_CSS }

        div {
            class: "board-layout",
            NoticeBoard {}
        }
    }
}
