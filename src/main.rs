use {
  anyhow::Result,
  macroquad::prelude::Conf,
  spot_painting::{app::App, painter::{self, SpotPainter}}
};

fn window_conf() -> Conf {
  Conf {
    window_title: "Hirst Spot Painting".to_string(),
    window_width: painter::DEFAULT_SIZE.0 as i32,
    window_height: painter::DEFAULT_SIZE.1 as i32,
    ..Default::default()
  }
}

async fn run() -> Result<()> {
  let painter = match std::env::args().nth(1) {
    Some(image) => SpotPainter::new(painter::DEFAULT_SIZE)?.with_image(image)?,
    None => SpotPainter::new(painter::DEFAULT_SIZE)?
  };
  App::new(painter)?.run().await
}

#[macroquad::main(window_conf)]
async fn main() {
  env_logger::init();
  if let Err(error) = run().await {
    log::error!("{:#}", error);
    std::process::exit(1);
  }
}
