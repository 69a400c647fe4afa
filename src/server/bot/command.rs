use crate::server::model::user::Role;

pub static START_USAGE: &str =
    "Hi! I coordinate rides. Use /register to sign up, /create_trip to request a ride.";
pub static REGISTER_USAGE: &str = "Usage: /register <role> <name>. Roles: admin, driver, passenger.";
pub static CREATE_TRIP_USAGE: &str = "Usage: /create_trip <origin> <destination>";
pub static ASSIGN_DRIVER_USAGE: &str = "Usage: /assign_driver <trip id> <driver id>";
pub static COMPLETE_TRIP_USAGE: &str = "Usage: /complete_trip <trip id>";

/// A parsed bot command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Start,
    Register { role: Role, name: String },
    CreateTrip { origin: String, destination: String },
    AssignDriver { trip_id: i32, driver_id: i32 },
    CompleteTrip { trip_id: i32 },
}

impl Command {
    /// Parses a message into a command.
    ///
    /// # Returns
    /// - `None` - The message is not a command; ignore it
    /// - `Some(Ok(Command))` - A well-formed command
    /// - `Some(Err(usage))` - A known command with bad arguments; reply with
    ///   the usage line
    pub fn parse(content: &str) -> Option<Result<Self, &'static str>> {
        let mut words = content.split_whitespace();
        let keyword = words.next()?;

        if !keyword.starts_with('/') {
            return None;
        }

        let args: Vec<&str> = words.collect();

        let parsed = match keyword {
            "/start" => Ok(Self::Start),
            "/register" => Self::parse_register(&args),
            "/create_trip" => Self::parse_create_trip(&args),
            "/assign_driver" => Self::parse_assign_driver(&args),
            "/complete_trip" => Self::parse_complete_trip(&args),
            _ => return None,
        };

        Some(parsed)
    }

    fn parse_register(args: &[&str]) -> Result<Self, &'static str> {
        let [role, name @ ..] = args else {
            return Err(REGISTER_USAGE);
        };

        let Some(role) = Role::parse(role) else {
            return Err(REGISTER_USAGE);
        };

        if name.is_empty() {
            return Err(REGISTER_USAGE);
        }

        Ok(Self::Register {
            role,
            name: name.join(" "),
        })
    }

    fn parse_create_trip(args: &[&str]) -> Result<Self, &'static str> {
        let [origin, destination] = args else {
            return Err(CREATE_TRIP_USAGE);
        };

        Ok(Self::CreateTrip {
            origin: (*origin).to_string(),
            destination: (*destination).to_string(),
        })
    }

    fn parse_assign_driver(args: &[&str]) -> Result<Self, &'static str> {
        let [trip_id, driver_id] = args else {
            return Err(ASSIGN_DRIVER_USAGE);
        };

        let (Ok(trip_id), Ok(driver_id)) = (trip_id.parse(), driver_id.parse()) else {
            return Err(ASSIGN_DRIVER_USAGE);
        };

        Ok(Self::AssignDriver { trip_id, driver_id })
    }

    fn parse_complete_trip(args: &[&str]) -> Result<Self, &'static str> {
        let [trip_id] = args else {
            return Err(COMPLETE_TRIP_USAGE);
        };

        let Ok(trip_id) = trip_id.parse() else {
            return Err(COMPLETE_TRIP_USAGE);
        };

        Ok(Self::CompleteTrip { trip_id })
    }
}
