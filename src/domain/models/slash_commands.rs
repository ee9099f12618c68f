#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        let prefix = args[0].to_string();
        args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_help()
            || cmd.is_lesson()
            || cmd.is_ask()
            || cmd.is_check()
            || cmd.is_sessions()
            || cmd.is_profile()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    pub fn is_lesson(&self) -> bool {
        return ["/l", "/lesson"].contains(&self.command.as_str());
    }

    pub fn is_ask(&self) -> bool {
        return ["/a", "/ask"].contains(&self.command.as_str());
    }

    pub fn is_check(&self) -> bool {
        return ["/c", "/check"].contains(&self.command.as_str());
    }

    pub fn is_sessions(&self) -> bool {
        return ["/s", "/sessions"].contains(&self.command.as_str());
    }

    pub fn is_profile(&self) -> bool {
        return ["/p", "/profile"].contains(&self.command.as_str());
    }
}
