#![allow(dead_code)]

use bean_notify::Config;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub fn config_for(port: u16) -> Config
{
    Config
    {
        smtp_server: "127.0.0.1".into(),
        smtp_port: port,
        smtp_username: "mailer".into(),
        smtp_password: "wrong-password".into(),
        sender_email: "noreply@example.com".into(),
        notification_email: "sales@example.com".into(),
        smtp_timeout: Some(Duration::from_secs(5)),
    }
}

/// A port nothing is listening on.
pub fn closed_port() -> u16
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Accepts one client, speaks just enough SMTP to get past the greeting and
/// EHLO without offering STARTTLS, and returns every command it received.
pub fn spawn_relay_without_starttls() -> (u16, JoinHandle<Vec<String>>)
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();

    let handle = thread::spawn(move ||
    {
        let (stream, _) = listener.accept().unwrap();
        stream.set_read_timeout(Some(Duration::from_secs(10))).unwrap();
        serve(stream)
    });

    (port, handle)
}

fn serve(mut stream: TcpStream) -> Vec<String>
{
    let mut commands = Vec::new();
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    stream.write_all(b"220 fake.relay ESMTP\r\n").unwrap();

    loop
    {
        let mut line = String::new();
        match reader.read_line(&mut line)
        {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let command = line.trim_end().to_string();
        let upper = command.to_ascii_uppercase();

        let reply: &[u8] = if upper.starts_with("EHLO")
        {
            b"250-fake.relay\r\n250 AUTH PLAIN LOGIN\r\n"
        }
        else if upper.starts_with("QUIT")
        {
            b"221 bye\r\n"
        }
        else
        {
            b"502 not implemented\r\n"
        };

        commands.push(command);
        if stream.write_all(reply).is_err() || upper.starts_with("QUIT")
        {
            break;
        }
    }

    commands
}
