mod mentions;
mod rank;
