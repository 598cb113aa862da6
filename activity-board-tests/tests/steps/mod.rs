mod board_steps;
mod notice_steps;
