mod verify_client;
