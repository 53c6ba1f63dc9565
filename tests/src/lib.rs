mod expansion;
mod membership;
