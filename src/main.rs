use anyhow::Result;

fn main() -> Result<()> {
    kakao_chat_viewer::cli::run()
}
